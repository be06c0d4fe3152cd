use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quizline", version, about = "Terminal multiple-choice quiz")]
pub struct Cli {
    /// Question bank file, or a directory holding questions.txt [default: .]
    #[arg(default_value = ".")]
    pub path: String,

    /// Ask at most N questions (0 = all)
    #[arg(long, short = 'n', value_name = "N")]
    pub max_questions: Option<usize>,

    /// Ask questions in bank order instead of at random
    #[arg(long)]
    pub sequential: bool,

    /// Seed the random generator for a reproducible run
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Parse the bank, print a summary and exit
    #[arg(long)]
    pub check: bool,

    /// Write a YAML results report to this file when the quiz ends
    #[arg(long, value_name = "path")]
    pub export: Option<String>,

    /// Config file [default: platform config dir]
    #[arg(long, value_name = "path")]
    pub config: Option<String>,

    /// Store the effective settings in the config file
    #[arg(long)]
    pub save_config: bool,

    /// Log file [default: platform data dir]
    #[arg(long, value_name = "path")]
    pub log_file: Option<String>,

    /// Verbose logging
    #[arg(long)]
    pub debug: bool,
}
