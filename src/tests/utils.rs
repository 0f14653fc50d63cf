use crate::console::FieldSource;
use crate::errors::CatalogError;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique throwaway path under the system temp dir
pub fn temp_xlsx_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{tag}_{}.xlsx",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Scripted stand-in for the interactive console. Pops one canned answer per
/// field and applies the same blank-falls-back-to-default rule as the real
/// prompt, while recording which labels were asked.
pub struct ScriptedSource {
    answers: VecDeque<String>,
    pub labels_seen: Vec<String>,
}

impl ScriptedSource {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            labels_seen: Vec::new(),
        }
    }

    fn next_answer(&mut self, label: &str, default: &str) -> String {
        self.labels_seen.push(label.to_string());
        let answer = self.answers.pop_front().unwrap_or_default();
        if answer.is_empty() {
            default.to_string()
        } else {
            answer
        }
    }
}

impl FieldSource for ScriptedSource {
    fn prompt(&mut self, label: &str, default: &str) -> Result<String, CatalogError> {
        Ok(self.next_answer(label, default))
    }

    fn edit_multiline(&mut self, label: &str, default: &str) -> Result<String, CatalogError> {
        Ok(self.next_answer(label, default))
    }
}
