//! Operator answers and the sources that supply them.

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::utils::path::normalize_path_fragment;

/// One free-text question asked before anything is written.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: QuestionKey,
    pub flag: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKey {
    SiteUrl,
    PublicPath,
    TemplatePath,
    SrcAssetsPath,
    DistAssetsPath,
}

/// Questions in the order they are asked.
pub const QUESTIONS: [Question; 5] = [
    Question {
        key: QuestionKey::SiteUrl,
        flag: "--site-url",
        message: "Enter the website URL (i.e. 'dev.union.co'):",
    },
    Question {
        key: QuestionKey::PublicPath,
        flag: "--public-path",
        message: "Where is your public directory located? (i.e. 'public' or 'public_html'):",
    },
    Question {
        key: QuestionKey::TemplatePath,
        flag: "--template-path",
        message: "Where will views be stored? Root-relative filepath (i.e. 'app/views'):",
    },
    Question {
        key: QuestionKey::SrcAssetsPath,
        flag: "--src-assets-path",
        message: "Enter the path where your source assets will be stored (i.e. 'public/src'):",
    },
    Question {
        key: QuestionKey::DistAssetsPath,
        flag: "--dist-assets-path",
        message: "Enter the path where your distributed assets will be stored (i.e. 'public/dist'):",
    },
];

/// Answers exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnswers {
    pub site_url: String,
    pub public_path: String,
    pub template_path: String,
    pub src_assets_path: String,
    pub dist_assets_path: String,
}

/// Answers with trailing separators stripped from every path field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnswers {
    pub site_url: String,
    pub public_path: String,
    pub template_path: String,
    pub src_assets_path: String,
    pub dist_assets_path: String,
}

impl ProjectAnswers {
    pub fn from_raw(raw: RawAnswers) -> Self {
        Self {
            site_url: raw.site_url,
            public_path: normalize_path_fragment(&raw.public_path),
            template_path: normalize_path_fragment(&raw.template_path),
            src_assets_path: normalize_path_fragment(&raw.src_assets_path),
            dist_assets_path: normalize_path_fragment(&raw.dist_assets_path),
        }
    }
}

/// Partially known answers, typically from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct PresetAnswers {
    pub site_url: Option<String>,
    pub public_path: Option<String>,
    pub template_path: Option<String>,
    pub src_assets_path: Option<String>,
    pub dist_assets_path: Option<String>,
}

impl PresetAnswers {
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        match key {
            QuestionKey::SiteUrl => self.site_url.as_deref(),
            QuestionKey::PublicPath => self.public_path.as_deref(),
            QuestionKey::TemplatePath => self.template_path.as_deref(),
            QuestionKey::SrcAssetsPath => self.src_assets_path.as_deref(),
            QuestionKey::DistAssetsPath => self.dist_assets_path.as_deref(),
        }
    }

    /// Questions that still need an answer, in asking order.
    pub fn missing(&self) -> Vec<&'static Question> {
        QUESTIONS
            .iter()
            .filter(|q| self.get(q.key).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

fn assign(raw: &mut RawAnswers, key: QuestionKey, value: String) {
    match key {
        QuestionKey::SiteUrl => raw.site_url = value,
        QuestionKey::PublicPath => raw.public_path = value,
        QuestionKey::TemplatePath => raw.template_path = value,
        QuestionKey::SrcAssetsPath => raw.src_assets_path = value,
        QuestionKey::DistAssetsPath => raw.dist_assets_path = value,
    }
}

/// Supplies the five answers. Called once, before any file is written.
pub trait AnswerSource {
    fn answers(&mut self) -> Result<RawAnswers>;
}

impl AnswerSource for PresetAnswers {
    /// Fails with the flags still missing instead of prompting.
    fn answers(&mut self) -> Result<RawAnswers> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(Error::validation_missing_argument(
                missing.iter().map(|q| q.flag.to_string()).collect(),
            )
            .with_hint("Pass every answer as a flag, or run from an interactive terminal"));
        }

        let mut raw = RawAnswers::default();
        for question in QUESTIONS.iter() {
            let value = self.get(question.key).unwrap_or_default().to_string();
            assign(&mut raw, question.key, value);
        }
        Ok(raw)
    }
}

/// Asks every question without a preset on `output`, reading lines from `input`.
pub struct PromptAnswers<R, W> {
    preset: PresetAnswers,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptAnswers<R, W> {
    pub fn new(preset: PresetAnswers, input: R, output: W) -> Self {
        Self {
            preset,
            input,
            output,
        }
    }

    fn ask(&mut self, question: &Question) -> Result<String> {
        write!(self.output, "{}\n> ", question.message)
            .and_then(|_| self.output.flush())
            .map_err(|e| Error::internal_io(e.to_string(), Some("write prompt".to_string())))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read answer".to_string())))?;

        if read == 0 {
            return Err(Error::validation_missing_argument(vec![question
                .flag
                .to_string()])
            .with_hint("Input ended before every question was answered"));
        }

        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> AnswerSource for PromptAnswers<R, W> {
    fn answers(&mut self) -> Result<RawAnswers> {
        let mut raw = RawAnswers::default();
        for question in QUESTIONS.iter() {
            let value = match self.preset.get(question.key) {
                Some(preset) => preset.to_string(),
                None => self.ask(question)?,
            };
            assign(&mut raw, question.key, value);
        }
        Ok(raw)
    }
}
