//! Relevance-ranked free-text search over the directory.
//!
//! The scoring is additive weighted term matching, computed the same
//! way for every caller. It is pure and synchronous; ranking the same
//! input twice yields the same output.

use aidex_dto::platforms::Platform;

const IMAGE_TERMS: &[&str] = &["image", "picture", "photo"];
const LANGUAGE_TERMS: &[&str] = &["language", "text", "chat", "write"];
const DEVELOPER_TERMS: &[&str] = &["developer", "coding", "code"];

/// Score one platform against a query. The query must already be
/// trimmed and lower-cased; `words` is its whitespace split.
fn relevance_score(platform: &Platform, query: &str, words: &[&str]) -> i32 {
    let mut score = 0;

    if platform.name.to_lowercase().contains(query) {
        score += 10;
    }

    if platform.description.to_lowercase().contains(query) {
        score += 5;
    }

    for tag in &platform.tags {
        let tag = tag.to_lowercase();
        if tag.contains(query) {
            score += 8;
        }
        for word in words {
            if word.len() > 2 && tag.contains(word) {
                score += 3;
            }
        }
    }

    for feature in &platform.features {
        let feature = feature.to_lowercase();
        if feature.contains(query) {
            score += 6;
        }
        for word in words {
            if word.len() > 2 && feature.contains(word) {
                score += 2;
            }
        }
    }

    // Context boosts. Each one is independent and additive.
    let tag_contains =
        |needle: &str| platform.tags.iter().any(|t| t.to_lowercase().contains(needle));

    if query.contains("free") && platform.pricing.has_free {
        score += 7;
    }

    if query.contains("api") && platform.api_available {
        score += 7;
    }

    if IMAGE_TERMS.iter().any(|t| query.contains(t)) && tag_contains("image") {
        score += 7;
    }

    if LANGUAGE_TERMS.iter().any(|t| query.contains(t))
        && (tag_contains("language") || tag_contains("nlp"))
    {
        score += 7;
    }

    if (query.contains("business") || query.contains("enterprise"))
        && platform.tags.iter().any(|t| t == "Enterprise")
    {
        score += 6;
    }

    // These two look at the raw tags on purpose: "API" and "Open
    // Source" are vocabulary entries, matched with their casing.
    if DEVELOPER_TERMS.iter().any(|t| query.contains(t))
        && platform
            .tags
            .iter()
            .any(|t| t.contains("API") || t.contains("Open Source"))
    {
        score += 6;
    }

    score
}

/// Rank platforms by relevance to a free-text query.
///
/// An empty or whitespace-only query is the identity: the input comes
/// back unchanged, in order. Otherwise platforms scoring zero are
/// dropped entirely and the rest are sorted by descending score; ties
/// keep input order (the sort is stable), so the result is
/// deterministic for a given input.
pub fn rank_platforms(platforms: Vec<Platform>, query: &str) -> Vec<Platform> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return platforms;
    }
    let words = query.split_whitespace().collect::<Vec<_>>();

    let mut scored = platforms
        .into_iter()
        .map(|p| (relevance_score(&p, &query, &words), p))
        .filter(|(score, _)| *score > 0)
        .collect::<Vec<_>>();

    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

    scored.into_iter().map(|(_, p)| p).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aidex_dto::platforms::Pricing;
    use chrono::TimeZone;

    fn platform(
        name: &str,
        description: &str,
        tags: &[&str],
        features: &[&str],
        has_free: bool,
        api_available: bool,
    ) -> Platform {
        Platform {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            logo: None,
            url: url::Url::parse("https://example.com").unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            features: features.iter().map(|f| f.to_string()).collect(),
            pricing: Pricing {
                has_free,
                free_description: None,
                paid_plans: vec![],
            },
            rating: 0.0,
            review_count: 0,
            api_available,
            approved: true,
            created_at: chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn score(platform: &Platform, query: &str) -> i32 {
        let query = query.trim().to_lowercase();
        let words = query.split_whitespace().collect::<Vec<_>>();
        relevance_score(platform, &query, &words)
    }

    fn names(platforms: &[Platform]) -> Vec<&str> {
        platforms.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let input = vec![
            platform("Zeta", "", &[], &[], false, false),
            platform("Alpha", "", &[], &[], false, false),
        ];

        let out = rank_platforms(input.clone(), "");
        assert_eq!(names(&out), vec!["Zeta", "Alpha"]);

        let out = rank_platforms(input, "   \t ");
        assert_eq!(names(&out), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn zero_score_platforms_are_dropped() {
        let input = vec![
            platform("Painter", "makes pictures", &["Image Generation"], &[], false, false),
            platform("Ledger", "bookkeeping", &["Finance"], &[], false, false),
        ];

        let out = rank_platforms(input, "image");
        assert_eq!(names(&out), vec!["Painter"]);
    }

    #[test]
    fn name_beats_description() {
        let input = vec![
            platform("Writer", "an assistant", &[], &[], false, false),
            platform("Helper", "a writer assistant", &[], &[], false, false),
        ];

        // "writer" in the name is +10, in the description +5.
        let out = rank_platforms(input, "writer");
        assert_eq!(names(&out), vec!["Writer", "Helper"]);
    }

    #[test]
    fn short_words_contribute_no_word_score() {
        // Both words are <= 2 characters, so tag word matching adds
        // nothing, and nothing else matches either.
        let p = platform("Tool", "does things", &["AI", "ML"], &[], false, false);
        assert_eq!(score(&p, "ai ml"), 0);

        let out = rank_platforms(vec![p], "ai ml");
        assert!(out.is_empty());
    }

    #[test]
    fn matching_rules_accumulate() {
        let p = platform(
            "ChatHelper",
            "a chat assistant",
            &["Chatbots"],
            &["chat history"],
            false,
            false,
        );

        // name +10, description +5, tag substring +8, tag word +3,
        // feature substring +6, feature word +2. No language boost:
        // that one wants a tag containing "language" or "nlp".
        assert_eq!(score(&p, "chat"), 34);
    }

    #[test]
    fn scoring_is_case_insensitive() {
        let p = platform("PixelForge", "generates art", &["Image Generation"], &[], false, false);
        assert_eq!(score(&p, "IMAGE"), score(&p, "image"));
        assert!(score(&p, "IMAGE") > 0);
    }

    #[test]
    fn free_api_image_query_scenario() {
        let p = platform(
            "PixelForge",
            "generates pictures from prompts",
            &["Image Generation", "API"],
            &[],
            true,
            true,
        );

        // Word-level tag matches: "image" and "generation" against
        // "Image Generation" (+3 each), "api" against "API" (+3).
        // Description word "pictures" does not matter (descriptions
        // have no word-level rule). Context boosts: free tier +7,
        // API +7, image term with image tag +7.
        assert_eq!(score(&p, "free api image generation"), 30);

        let none = platform("Ledger", "bookkeeping", &["Finance"], &[], false, false);
        let out = rank_platforms(vec![none, p], "free api image generation");
        assert_eq!(names(&out), vec!["PixelForge"]);
    }

    #[test]
    fn enterprise_boost_needs_the_literal_tag() {
        let exact = platform("Suite", "for companies", &["Enterprise"], &[], false, false);
        let close = platform("Suite2", "for companies", &["enterprise solutions"], &[], false, false);

        assert_eq!(score(&exact, "business"), 6);
        // "business" is not a substring of the tag and the boost wants
        // the exact "Enterprise" tag, so nothing matches at all.
        assert_eq!(score(&close, "business"), 0);
    }

    #[test]
    fn developer_boost_matches_vocabulary_casing() {
        let p = platform("DevKit", "toolkit", &["Open Source"], &[], false, false);
        assert_eq!(score(&p, "coding"), 6);

        // Lower-cased tag does not trigger the vocabulary boost.
        let p = platform("DevKit", "toolkit", &["open source"], &[], false, false);
        assert_eq!(score(&p, "coding"), 0);
    }

    #[test]
    fn ties_keep_input_order_and_ranking_is_deterministic() {
        let input = vec![
            platform("First", "chat tool", &[], &[], false, false),
            platform("Second", "chat tool", &[], &[], false, false),
            platform("Third", "chat tool", &[], &[], false, false),
        ];

        let once = rank_platforms(input.clone(), "chat");
        assert_eq!(names(&once), vec!["First", "Second", "Third"]);

        let twice = rank_platforms(input, "chat");
        assert_eq!(names(&once), names(&twice));
    }
}
