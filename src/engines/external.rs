//! Runs an out-of-process tagger and parses its line protocol.
//!
//! The child reads the document text on stdin and writes one analysis per
//! line: `start \t end \t payload`, offsets counted in characters. Blank
//! lines separate sentences and are skipped.

use std::process::Stdio;

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::analysis::{Payload, PayloadKind, RawAnalysis};

use super::{Error, TagRequest, Tagger};

static ANALYSIS_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\t(\d+)\t(.*)$").unwrap());

/// Wraps an external tagger binary. Only the string-valued payload kinds can
/// cross the line protocol; structured bundles need an in-process engine.
pub struct ExternalTagger {
    name: String,
    command: String,
    args: Vec<String>,
    kind: PayloadKind,
}

impl ExternalTagger {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        kind: PayloadKind,
    ) -> Self {
        ExternalTagger {
            name: name.into(),
            command: command.into(),
            args: Vec::new(),
            kind,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn parse_line(&self, line: &str) -> Result<RawAnalysis, Error> {
        let captures = ANALYSIS_LINE
            .captures(line)
            .ok_or_else(|| Error::Protocol(line.to_string()))?;

        let start: usize = captures[1]
            .parse()
            .map_err(|_| Error::Protocol(line.to_string()))?;
        let end: usize = captures[2]
            .parse()
            .map_err(|_| Error::Protocol(line.to_string()))?;
        let raw = captures[3].to_string();

        let payload = match self.kind {
            PayloadKind::Compact => Payload::Compact(raw),
            PayloadKind::Chain => Payload::Chain(raw),
            PayloadKind::Bundle => return Err(Error::Unsupported(PayloadKind::Bundle)),
        };
        Ok(RawAnalysis::new(start, end, payload))
    }
}

#[async_trait::async_trait]
impl Tagger for ExternalTagger {
    fn name(&self) -> &str {
        &self.name
    }

    fn payload_kind(&self) -> PayloadKind {
        self.kind
    }

    async fn analyze(&self, request: &TagRequest) -> Result<Vec<RawAnalysis>, Error> {
        if self.kind == PayloadKind::Bundle {
            return Err(Error::Unsupported(PayloadKind::Bundle));
        }

        let mut command = Command::new(&self.command);
        command.args(&self.args).arg(&request.language);
        if let Some(variant) = &request.variant {
            command.arg(variant);
        }

        tracing::debug!(tagger = %self.name, language = %request.language, "spawning tagger");

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let mut stdin = child.stdin.take().unwrap();
        let text = request.text.clone();
        tokio::spawn(async move {
            stdin.write_all(text.as_bytes()).await.unwrap();
        });

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(Error::Status(output.status));
        }

        let stdout = String::from_utf8(output.stdout)?;
        let mut analyses = Vec::new();
        for line in stdout.lines() {
            if line.is_empty() {
                continue;
            }
            analyses.push(self.parse_line(line)?);
        }

        tracing::debug!(tagger = %self.name, count = analyses.len(), "tagger finished");
        Ok(analyses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_tagger() -> ExternalTagger {
        ExternalTagger::new("sfst", "/usr/bin/true", PayloadKind::Chain)
    }

    #[test]
    fn parses_protocol_line() {
        let analysis = chain_tagger().parse_line("7\t14\thastane<n>").unwrap();
        assert_eq!(analysis.start, 7);
        assert_eq!(analysis.end, 14);
        assert_eq!(analysis.payload, Payload::Chain("hastane<n>".to_string()));
    }

    #[test]
    fn payload_is_taken_verbatim_after_second_tab() {
        let analysis = chain_tagger().parse_line("0\t2\tev<n>\t<extra>").unwrap();
        assert_eq!(
            analysis.payload,
            Payload::Chain("ev<n>\t<extra>".to_string())
        );
    }

    #[test]
    fn rejects_garbage_lines() {
        assert!(matches!(
            chain_tagger().parse_line("not a line"),
            Err(Error::Protocol(_))
        ));
        assert!(matches!(
            chain_tagger().parse_line("7\thastane<n>"),
            Err(Error::Protocol(_))
        ));
    }

    #[tokio::test]
    async fn bundle_kind_is_rejected_up_front() {
        let tagger = ExternalTagger::new("rftagger", "/usr/bin/true", PayloadKind::Bundle);
        let err = tagger
            .analyze(&TagRequest::new("de", "Haus"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported(PayloadKind::Bundle)));
    }

    #[tokio::test]
    async fn runs_a_real_process() {
        let tagger = ExternalTagger::new("cat", "cat", PayloadKind::Chain).arg("--");
        // `cat -- tr` fails because the file does not exist; what matters
        // here is that spawn, status and error plumbing hold together.
        let result = tagger.analyze(&TagRequest::new("tr", "ev")).await;
        assert!(matches!(result, Err(Error::Status(_))));
    }
}
