//! Passive voice: an auxiliary verb directly followed by a word ending in "ed".

use super::{clean_token, Annotator};
use crate::analyzer::wordlists::PASSIVE_AUXILIARIES;
use crate::{AnalysisState, SpanClass, CLOSE_TAG};

/// Rule for flagging "was kicked" style constructions
pub struct PassiveVoiceRule;

impl PassiveVoiceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PassiveVoiceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for PassiveVoiceRule {
    fn class(&self) -> SpanClass {
        SpanClass::Passive
    }

    fn annotate(&self, sentence: &str, state: &mut AnalysisState) -> String {
        let mut words: Vec<String> = sentence.split(' ').map(str::to_string).collect();
        let cleaned: Vec<String> = words.iter().map(|w| clean_token(w)).collect();

        for i in 1..cleaned.len() {
            if cleaned[i].ends_with("ed") && PASSIVE_AUXILIARIES.contains(&cleaned[i - 1].as_str())
            {
                words[i - 1].insert_str(0, &SpanClass::Passive.open_tag());
                words[i].push_str(CLOSE_TAG);
                state.passive_voice += 1;
            }
        }

        words.join(" ")
    }
}
