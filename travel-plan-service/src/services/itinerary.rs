//! Prompt composition and response formatting for travel itineraries.

/// Instruction prepended to every user prompt before the model call.
pub const SYSTEM_PROMPT: &str = "You are a budget travel ticket advisor specializing in finding \
    the most affordable transportation options for your clients. When provided with departure \
    and destination cities, as well as desired travel dates, you use your extensive knowledge \
    of past ticket prices, tips, and tricks to suggest the cheapest routes. Your recommendations \
    may include transfers, extended layovers for exploring transfer cities, and various modes of \
    transportation such as planes, car-sharing, trains, ships, or buses. Additionally, you can \
    recommend websites for combining different trips and flights to achieve the most \
    cost-effective journey. Mention the places/local food/local languages frequently used \
    sentences, etc. Mention approx budget (INR) for each thing and total budget (INR) at the end.";

/// Header line of every formatted itinerary.
pub const ITINERARY_HEADER: &str = "### Suggested Travel Itinerary";

/// Full prompt sent to the model: system instruction, a space, then the
/// user's prompt.
pub fn compose_prompt(user_prompt: &str) -> String {
    format!("{} {}", SYSTEM_PROMPT, user_prompt)
}

/// Reformats raw model output as a Markdown itinerary: fixed header, then
/// each line with surrounding whitespace stripped.
pub fn format_itinerary(text: &str) -> String {
    let body = text
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", ITINERARY_HEADER, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_prompt_joins_with_single_space() {
        let prompt = compose_prompt("Mumbai to Goa in May");
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.ends_with(" Mumbai to Goa in May"));
        assert_eq!(
            prompt.len(),
            SYSTEM_PROMPT.len() + 1 + "Mumbai to Goa in May".len()
        );
    }

    #[test]
    fn format_itinerary_prepends_header() {
        let formatted = format_itinerary("Day 1: fly to Goa");
        assert_eq!(
            formatted,
            "### Suggested Travel Itinerary\nDay 1: fly to Goa"
        );
    }

    #[test]
    fn format_itinerary_trims_each_line() {
        let formatted = format_itinerary("  Day 1: train\t\n   Day 2: bus  ");
        assert_eq!(
            formatted,
            "### Suggested Travel Itinerary\nDay 1: train\nDay 2: bus"
        );
    }

    #[test]
    fn format_itinerary_keeps_blank_lines() {
        let formatted = format_itinerary("Day 1\n\nDay 2\n");
        assert_eq!(formatted, "### Suggested Travel Itinerary\nDay 1\n\nDay 2\n");
    }

    #[test]
    fn format_itinerary_strips_carriage_returns() {
        let formatted = format_itinerary("Day 1\r\nDay 2");
        assert_eq!(formatted, "### Suggested Travel Itinerary\nDay 1\nDay 2");
    }
}
