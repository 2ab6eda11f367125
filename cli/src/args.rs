//! Command-line arguments for the `luma` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use luma_engine::{ExamMode, SyntaxMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Board,
    Neet,
    Jee,
}

impl From<ModeArg> for ExamMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Board => ExamMode::Board,
            ModeArg::Neet => ExamMode::Neet,
            ModeArg::Jee => ExamMode::Jee,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SyntaxArg {
    Exam,
    Casual,
}

impl From<SyntaxArg> for SyntaxMode {
    fn from(syntax: SyntaxArg) -> Self {
        match syntax {
            SyntaxArg::Exam => SyntaxMode::Exam,
            SyntaxArg::Casual => SyntaxMode::Casual,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "luma", version)]
#[command(about = "Answer a chemistry question deterministically and print the response packet as JSON")]
#[command(after_help = "Reads the question from stdin when none is given. Put `--` before a question that starts with '-'.")]
pub struct Cli {
    /// Exam mode to package the answer for
    #[arg(long, value_enum, ignore_case = true)]
    pub mode: Option<ModeArg>,

    /// Question context (class, chapter, exam_mode, stereo, ...)
    #[arg(long, value_name = "FILE.json")]
    pub context: Option<PathBuf>,

    /// Student attempt used for error signals
    #[arg(long, value_name = "FILE.json")]
    pub attempt: Option<PathBuf>,

    /// How the question is phrased
    #[arg(long, value_enum, ignore_case = true, default_value_t = SyntaxArg::Exam)]
    pub syntax: SyntaxArg,

    /// Print the five answer sections instead of the packet
    #[arg(long)]
    pub sections: bool,

    /// Question words; joined with single spaces
    #[arg(trailing_var_arg = true)]
    pub question: Vec<String>,
}

impl Cli {
    /// Empty means "read stdin".
    #[must_use]
    pub fn question(&self) -> String {
        self.question.join(" ")
    }

    #[must_use]
    pub fn exam_mode(&self) -> Option<ExamMode> {
        self.mode.map(ExamMode::from)
    }

    #[must_use]
    pub fn syntax_mode(&self) -> SyntaxMode {
        self.syntax.into()
    }
}

#[cfg(test)]
mod tests {
    use std::iter;

    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(iter::once("luma").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn question_words_are_joined() {
        let cli = parse(&["phenol", "+", "Br2", "water"]).unwrap();
        assert_eq!(cli.question(), "phenol + Br2 water");
        assert_eq!(cli.exam_mode(), None);
        assert_eq!(cli.syntax_mode(), SyntaxMode::Exam);
    }

    #[test]
    fn flags_accept_both_forms() {
        let cli = parse(&["--mode", "jee", "--context=ctx.json", "--sections", "SN1?"]).unwrap();
        assert_eq!(cli.exam_mode(), Some(ExamMode::Jee));
        assert_eq!(cli.context, Some(PathBuf::from("ctx.json")));
        assert!(cli.sections);
        assert_eq!(cli.question(), "SN1?");
    }

    #[test]
    fn enum_values_ignore_case() {
        let cli = parse(&["--mode", "NEET", "--syntax", "Casual", "q"]).unwrap();
        assert_eq!(cli.exam_mode(), Some(ExamMode::Neet));
        assert_eq!(cli.syntax_mode(), SyntaxMode::Casual);
    }

    #[test]
    fn double_dash_ends_options() {
        let cli = parse(&["--", "--mode", "is", "text"]).unwrap();
        assert_eq!(cli.question(), "--mode is text");
        assert_eq!(cli.exam_mode(), None);
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            parse(&["--mode", "olympiad", "q"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert!(parse(&["--mode"]).is_err());
        assert_eq!(
            parse(&["--colour", "q"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn help_and_version_are_built_in() {
        assert_eq!(parse(&["--help"]).unwrap_err().kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse(&["-V"]).unwrap_err().kind(), ErrorKind::DisplayVersion);
    }
}
