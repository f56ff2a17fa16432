//! The landing slide deck
//!
//! Fixed per session and handed to the carousel at construction; the engine
//! itself carries no built-in content.

use researchit_core::Slide;

/// Slides shown on the home carousel
pub fn landing_deck() -> Vec<Slide> {
    vec![
        Slide::new(
            "Welcome to Researchit",
            "Researchit is a terminal front end for semantic paper search. \
             A remote service embeds your query and ranks arXiv papers by \
             similarity; this client renders the results and never sees the \
             ranking internals.",
            "Your gateway to academic papers, rendered in the terminal.",
        ),
        Slide::new(
            "Search Semantically",
            "Queries are matched against document-level embeddings rather \
             than keywords, so \"how do transformers attend\" finds the \
             papers you mean. Smart search escalates ranking modes until \
             enough strong results come back.",
            "Press Tab until the Search view, type a query, hit Enter.",
        ),
        Slide::new(
            "Navigate by Gesture",
            "This carousel advances exactly one slide per wheel gesture: \
             small jitters are filtered by a threshold and a cooldown \
             matched to the animation keeps a long scroll from skipping \
             ahead. Arrow keys always work too.",
            "One gesture, one slide. Scroll or press the arrow keys.",
        ),
        Slide::new(
            "Browse the Deck",
            "The browse view keeps every title in a scrollable column and \
             derives the current item from whatever sits closest to the top \
             edge, re-rendering the side panels as you go. No throttling \
             there - the highlight tracks the scroll continuously.",
            "A continuous, scroll-synced alternative to the carousel.",
        ),
        Slide::new(
            "Read the Details",
            "Result cards carry relevance scores, authors, publication \
             dates, subject categories, and a link to the arXiv abstract \
             page. Strong matches are marked so you can skim.",
            "Scores above 0.8 are strong; above 0.7 are fair.",
        ),
    ]
}
