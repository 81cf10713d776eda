//! Static word and phrase tables used by the annotators

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Words ending in "ly" that are not adverbs
static LY_EXCEPTION_WORDS: &[&str] = &[
    "actually", "additionally", "allegedly", "ally", "alternatively", "anomaly", "apply",
    "approximately", "ashely", "ashly", "assembly", "awfully", "baily", "belly", "bely",
    "billy", "bradly", "bristly", "bubbly", "bully", "burly", "butterfly", "carly", "charly",
    "chilly", "comely", "completely", "comply", "consequently", "costly", "courtly", "crinkly",
    "crumbly", "cuddly", "curly", "currently", "daily", "dastardly", "deadly", "deathly",
    "definitely", "dilly", "disorderly", "doily", "dolly", "dragonfly", "early", "elderly",
    "elly", "emily", "especially", "exactly", "exclusively", "family", "finally", "firefly",
    "folly", "friendly", "frilly", "gadfly", "gangly", "generally", "ghastly", "giggly",
    "globally", "goodly", "gravelly", "grisly", "gully", "haily", "hally", "harly", "hardly",
    "heavenly", "hillbilly", "hilly", "holly", "holy", "homely", "homily", "horsefly", "hourly",
    "immediately", "instinctively", "imply", "italy", "jelly", "jiggly", "jilly", "jolly",
    "july", "karly", "kelly", "kindly", "lately", "likely", "lilly", "lily", "lively", "lolly",
    "lonely", "lovely", "lowly", "luckily", "mealy", "measly", "melancholy", "mentally",
    "molly", "monopoly", "monthly", "multiply", "nightly", "oily", "only", "orderly", "panoply",
    "particularly", "partly", "paully", "pearly", "pebbly", "polly", "potbelly", "presumably",
    "previously", "pualy", "quarterly", "rally", "rarely", "recently", "rely", "reply",
    "reportedly", "roughly", "sally", "scaly", "shapely", "shelly", "shirly", "shortly",
    "sickly", "silly", "sly", "smelly", "sparkly", "spindly", "spritely", "squiggly", "stately",
    "steely", "supply", "surly", "tally", "timely", "trolly", "ugly", "underbelly",
    "unfortunately", "unholy", "unlikely", "usually", "waverly", "weekly", "wholly", "willy",
    "wily", "wobbly", "wooly", "worldly", "wrinkly", "yearly",
];

/// Adverbs that do not end in "ly"
static COMMON_ADVERB_WORDS: &[&str] = &[
    "far", "also", "really", "very", "too", "so", "just", "even", "still", "almost", "always",
    "never", "often", "sometimes", "usually", "now", "then", "here", "there", "well", "quite",
    "rather", "enough", "indeed", "perhaps", "maybe", "certainly", "surely", "definitely",
    "absolutely", "completely", "totally", "entirely", "fully", "partly", "hardly", "barely",
    "scarcely", "nearly", "practically", "virtually", "actually", "truly", "obviously",
    "clearly", "apparently", "evidently", "seemingly", "probably", "possibly", "consequently",
    "therefore", "thus", "hence", "accordingly", "moreover", "furthermore", "additionally",
    "besides", "likewise", "similarly", "conversely", "however", "nevertheless", "nonetheless",
    "yet", "instead", "otherwise", "everywhere", "anywhere", "nowhere", "somewhere",
    "elsewhere", "near", "close", "away", "back", "forward", "ahead", "behind", "above",
    "below", "over", "under", "across", "through", "around", "about", "along", "beside",
    "between", "among", "within", "without", "inside", "outside", "before", "after", "during",
    "since", "until", "while", "when", "where", "why", "how", "ever", "seldom", "rarely",
    "frequently", "occasionally", "generally", "normally", "typically", "commonly", "mainly",
    "mostly", "largely", "primarily", "chiefly", "especially", "particularly", "specifically",
    "notably", "remarkably", "significantly", "considerably", "substantially", "greatly",
    "highly", "extremely", "fairly", "pretty", "somewhat", "slightly", "moderately",
    "reasonably", "sufficiently", "adequately", "merely", "simply", "purely", "solely",
    "exclusively", "altogether", "utterly", "perfectly", "exactly", "precisely",
];

/// Hedging phrases, in match order
pub static QUALIFIERS: &[&str] = &[
    "i believe", "i consider", "i don't believe", "i don't consider", "i don't feel",
    "i don't suggest", "i don't think", "i feel", "i hope to", "i might", "i suggest",
    "i think", "i was wondering", "i will try", "i wonder", "in my opinion", "is kind of",
    "is sort of", "just", "maybe", "perhaps", "possibly", "we believe", "we consider",
    "we don't believe", "we don't consider", "we don't feel", "we don't suggest",
    "we don't think", "we feel", "we hope to", "we might", "we suggest", "we think",
    "we were wondering", "we will try", "we wonder",
];

/// Wordy phrases and their simpler replacements, in match order
pub static COMPLEX_PHRASES: &[(&str, &[&str])] = &[
    ("a number of", &["many", "some"]),
    ("abundance", &["enough", "plenty"]),
    ("accede to", &["allow", "agree to"]),
    ("accelerate", &["speed up"]),
    ("accentuate", &["stress"]),
    ("accompany", &["go with", "with"]),
    ("accomplish", &["do"]),
    ("accorded", &["given"]),
    ("accrue", &["add", "gain"]),
    ("acquiesce", &["agree"]),
    ("acquire", &["get"]),
    ("additional", &["more", "extra"]),
    ("adjacent to", &["next to"]),
    ("adjustment", &["change"]),
    ("admissible", &["allowed", "accepted"]),
    ("advantageous", &["helpful"]),
    ("adversely impact", &["hurt"]),
    ("advise", &["tell"]),
    ("aforementioned", &["remove"]),
    ("aggregate", &["total", "add"]),
    ("aircraft", &["plane"]),
    ("all of", &["all"]),
    ("alleviate", &["ease", "reduce"]),
    ("allocate", &["divide"]),
    ("along the lines of", &["like", "as in"]),
    ("already existing", &["existing"]),
    ("alternatively", &["or"]),
    ("ameliorate", &["improve", "help"]),
    ("anticipate", &["expect"]),
    ("apparent", &["clear", "plain"]),
    ("appreciable", &["many"]),
    ("as a means of", &["to"]),
    ("as of yet", &["yet"]),
    ("as to", &["on", "about"]),
    ("as yet", &["yet"]),
    ("ascertain", &["find out", "learn"]),
    ("assistance", &["help"]),
    ("at this time", &["now"]),
    ("attain", &["meet"]),
    ("attributable to", &["because"]),
    ("authorize", &["allow", "let"]),
    ("because of the fact that", &["because"]),
    ("belated", &["late"]),
    ("benefit from", &["enjoy"]),
    ("bestow", &["give", "award"]),
    ("by virtue of", &["by", "under"]),
    ("cease", &["stop"]),
    ("close proximity", &["near"]),
    ("commence", &["begin or start"]),
    ("comply with", &["follow"]),
    ("concerning", &["about", "on"]),
    ("consequently", &["so"]),
    ("consolidate", &["join", "merge"]),
    ("constitutes", &["is", "forms", "makes up"]),
    ("demonstrate", &["prove", "show"]),
    ("depart", &["leave", "go"]),
    ("designate", &["choose", "name"]),
    ("discontinue", &["drop", "stop"]),
    ("due to the fact that", &["because", "since"]),
    ("each and every", &["each"]),
    ("economical", &["cheap"]),
    ("eliminate", &["cut", "drop", "end"]),
    ("elucidate", &["explain"]),
    ("employ", &["use"]),
    ("endeavor", &["try"]),
    ("enumerate", &["count"]),
    ("equitable", &["fair"]),
    ("equivalent", &["equal"]),
    ("evaluate", &["test", "check"]),
    ("evidenced", &["showed"]),
    ("exclusively", &["only"]),
    ("expedite", &["hurry"]),
    ("expend", &["spend"]),
    ("expiration", &["end"]),
    ("facilitate", &["ease", "help"]),
    ("factual evidence", &["facts", "evidence"]),
    ("feasible", &["workable"]),
    ("finalize", &["complete", "finish"]),
    ("first and foremost", &["first"]),
    ("for the purpose of", &["to"]),
    ("forfeit", &["lose", "give up"]),
    ("formulate", &["plan"]),
    ("honest truth", &["truth"]),
    ("however", &["but", "yet"]),
    ("if and when", &["if", "when"]),
    ("impacted", &["affected", "harmed", "changed"]),
    ("implement", &["install", "put in place", "tool"]),
    ("in a timely manner", &["on time"]),
    ("in accordance with", &["by", "under"]),
    ("in addition", &["also", "besides", "too"]),
    ("in all likelihood", &["probably"]),
    ("in an effort to", &["to"]),
    ("in between", &["between"]),
    ("in excess of", &["more than"]),
    ("in lieu of", &["instead"]),
    ("in light of the fact that", &["because"]),
    ("in many cases", &["often"]),
    ("in order to", &["to"]),
    ("in regard to", &["about", "concerning", "on"]),
    ("in some instances ", &["sometimes"]),
    ("in terms of", &["omit"]),
    ("in the near future", &["soon"]),
    ("in the process of", &["omit"]),
    ("inception", &["start"]),
    ("incumbent upon", &["must"]),
    ("indicate", &["say", "state", "or show"]),
    ("indication", &["sign"]),
    ("initiate", &["start"]),
    ("is applicable to", &["applies to"]),
    ("is authorized to", &["may"]),
    ("is responsible for", &["handles"]),
    ("it is essential", &["must", "need to"]),
    ("literally", &["omit"]),
    ("magnitude", &["size"]),
    ("maximum", &["greatest", "largest", "most"]),
    ("methodology", &["method"]),
    ("minimize", &["cut"]),
    ("minimum", &["least", "smallest", "small"]),
    ("modify", &["change"]),
    ("monitor", &["check", "watch", "track"]),
    ("multiple", &["many"]),
    ("necessitate", &["cause", "need"]),
    ("nevertheless", &["still", "besides", "even so"]),
    ("not certain", &["uncertain"]),
    ("not many", &["few"]),
    ("not often", &["rarely"]),
    ("not unless", &["only if"]),
    ("not unlike", &["similar", "alike"]),
    ("notwithstanding", &["in spite of", "still"]),
    ("null and void", &["use either null or void"]),
    ("numerous", &["many"]),
    ("objective", &["aim", "goal"]),
    ("obligate", &["bind", "compel"]),
    ("obtain", &["get"]),
    ("on the contrary", &["but", "so"]),
    ("on the other hand", &["omit", "but", "so"]),
    ("one particular", &["one"]),
    ("optimum", &["best", "greatest", "most"]),
    ("overall", &["omit"]),
    ("owing to the fact that", &["because", "since"]),
    ("participate", &["take part"]),
    ("particulars", &["details"]),
    ("pass away", &["die"]),
    ("pertaining to", &["about", "of", "on"]),
    ("point in time", &["time", "point", "moment", "now"]),
    ("portion", &["part"]),
    ("possess", &["have", "own"]),
    ("preclude", &["prevent"]),
    ("previously", &["before"]),
    ("prior to", &["before"]),
    ("prioritize", &["rank", "focus on"]),
    ("procure", &["buy", "get"]),
    ("proficiency", &["skill"]),
    ("provided that", &["if"]),
    ("purchase", &["buy", "sale"]),
    ("put simply", &["omit"]),
    ("readily apparent", &["clear"]),
    ("refer back", &["refer"]),
    ("regarding", &["about", "of", "on"]),
    ("relocate", &["move"]),
    ("remainder", &["rest"]),
    ("remuneration", &["payment"]),
    ("require", &["must", "need"]),
    ("requirement", &["need", "rule"]),
    ("reside", &["live"]),
    ("residence", &["house"]),
    ("retain", &["keep"]),
    ("satisfy", &["meet", "please"]),
    ("shall", &["must", "will"]),
    ("should you wish", &["if you want"]),
    ("similar to", &["like"]),
    ("solicit", &["ask for", "request"]),
    ("span across", &["span", "cross"]),
    ("strategize", &["plan"]),
    ("subsequent", &["later", "next", "after", "then"]),
    ("substantial", &["large", "much"]),
    ("successfully complete", &["complete", "pass"]),
    ("sufficient", &["enough"]),
    ("terminate", &["end", "stop"]),
    ("the month of", &["omit"]),
    ("therefore", &["thus", "so"]),
    ("this day and age", &["today"]),
    ("time period", &["time", "period"]),
    ("took advantage of", &["preyed on"]),
    ("transmit", &["send"]),
    ("transpire", &["happen"]),
    ("until such time as", &["until"]),
    ("utilization", &["use"]),
    ("utilize", &["use"]),
    ("validate", &["confirm"]),
    ("various different", &["various", "different"]),
    ("whether or not", &["whether"]),
    ("with respect to", &["on", "about"]),
    ("with the exception of", &["except for"]),
    ("witnessed", &["saw", "seen"]),
];

pub static LY_EXCEPTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LY_EXCEPTION_WORDS.iter().copied().collect());

pub static COMMON_ADVERBS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_ADVERB_WORDS.iter().copied().collect());

/// Auxiliary verbs that open a passive construction
pub const PASSIVE_AUXILIARIES: [&str; 7] = ["is", "are", "was", "were", "be", "been", "being"];

/// Simpler alternatives for a complex phrase, matched case-insensitively
pub fn suggestions_for(phrase: &str) -> Option<&'static [&'static str]> {
    let needle = phrase.to_ascii_lowercase();
    COMPLEX_PHRASES
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, replacements)| *replacements)
}

/// Case-insensitive matcher for a literal phrase
pub fn phrase_pattern(phrase: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(phrase))).expect("escaped phrase is a valid pattern")
}

/// Compiled complex-phrase matchers with their replacements, in table order
pub static COMPLEX_PATTERNS: Lazy<Vec<(Regex, &'static [&'static str])>> = Lazy::new(|| {
    COMPLEX_PHRASES
        .iter()
        .map(|(phrase, replacements)| (phrase_pattern(phrase), *replacements))
        .collect()
});

/// Compiled qualifier matchers, in table order
pub static QUALIFIER_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| QUALIFIERS.iter().map(|q| phrase_pattern(q)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        let all = LY_EXCEPTION_WORDS
            .iter()
            .chain(COMMON_ADVERB_WORDS)
            .chain(QUALIFIERS)
            .chain(COMPLEX_PHRASES.iter().map(|(k, _)| k));
        for entry in all {
            assert_eq!(*entry, entry.to_lowercase(), "{entry} should be lowercase");
        }
    }

    #[test]
    fn test_every_complex_phrase_has_a_replacement() {
        for (phrase, replacements) in COMPLEX_PHRASES {
            assert!(!replacements.is_empty(), "{phrase} has no replacement");
        }
    }

    #[test]
    fn test_lookups() {
        assert!(LY_EXCEPTIONS.contains("family"));
        assert!(LY_EXCEPTIONS.contains("only"));
        assert!(COMMON_ADVERBS.contains("very"));
        assert!(COMMON_ADVERBS.contains("often"));
        assert!(QUALIFIERS.contains(&"i think"));
        assert_eq!(suggestions_for("Utilize"), Some(&["use"][..]));
        assert_eq!(suggestions_for("in order to"), Some(&["to"][..]));
        assert_eq!(suggestions_for("plain"), None);
    }

    #[test]
    fn test_compiled_patterns_follow_tables() {
        assert_eq!(COMPLEX_PATTERNS.len(), COMPLEX_PHRASES.len());
        assert_eq!(QUALIFIER_PATTERNS.len(), QUALIFIERS.len());
        assert!(COMPLEX_PATTERNS[0].0.is_match("A Number Of people"));
        assert!(QUALIFIER_PATTERNS[0].is_match("I BELIEVE"));
        // punctuation in keys is literal
        assert!(!phrase_pattern("e.g.").is_match("eggs"));
    }

    #[test]
    fn test_table_order_is_fixed() {
        assert_eq!(COMPLEX_PHRASES[0].0, "a number of");
        assert_eq!(QUALIFIERS[0], "i believe");
    }
}
