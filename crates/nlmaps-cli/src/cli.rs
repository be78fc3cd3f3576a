use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nlmaps", bin_name = "nlmaps")]
#[command(about = "Linearise, reconstruct, and score NLmaps MRL queries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Turn MRL queries into flat token@arity streams
    #[command(after_help = r#"EXAMPLES:
  nlmaps linearise -i train.mrl -o train.lin"#)]
    Linearise {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        dialect: DialectArg,
    },

    /// Rebuild MRL queries from linearised streams
    #[command(after_help = r#"EXAMPLES:
  nlmaps functionalise -i decoded.lin -o decoded.mrl
  nlmaps functionalise -i decoded.lin -o decoded.mrl --non-stemmed src.tok --stemmed src.stem
  nlmaps functionalise -i decoded.lin -o decoded.mrl --cfg nlmaps.scfg --decoder ~/cdec"#)]
    Functionalise {
        #[command(flatten)]
        files: FileArgs,

        #[command(flatten)]
        passthrough: PassThroughArgs,

        /// Append @s to tokens that carry no @ annotation
        #[arg(long = "missing-at")]
        missing_at: bool,

        #[command(flatten)]
        validator: ValidatorArgs,

        #[command(flatten)]
        dialect: DialectArg,
    },

    /// Score hypothesis sequences against gold sequences
    #[command(after_help = r#"EXAMPLES:
  nlmaps evaluate -i decoded.mrl -g gold.mrl"#)]
    Evaluate {
        /// Location of the hypothesis file
        #[arg(long, short = 'i', value_name = "FILE")]
        input: PathBuf,

        /// Location of the gold file
        #[arg(long, short = 'g', value_name = "FILE")]
        gold: PathBuf,
    },
}

#[derive(Args)]
pub struct FileArgs {
    /// Location of the input file
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: PathBuf,

    /// Location of the output file
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct DialectArg {
    /// MRL dialect to apply
    #[arg(long, default_value = "nlmaps", value_name = "DIALECT")]
    pub dialect: String,
}

#[derive(Args)]
pub struct PassThroughArgs {
    /// Non-stemmed source tokens, one sentence per input line
    #[arg(long, value_name = "FILE", requires = "stemmed")]
    pub non_stemmed: Option<PathBuf>,

    /// Stemmed source tokens, aligned with --non-stemmed
    #[arg(long, value_name = "FILE", requires = "non_stemmed")]
    pub stemmed: Option<PathBuf>,
}

#[derive(Args)]
pub struct ValidatorArgs {
    /// NLmaps CFG to validate reconstructed queries against
    #[arg(long, value_name = "FILE", requires = "decoder")]
    pub cfg: Option<PathBuf>,

    /// Root of a cdec checkout (the binary is expected at decoder/cdec)
    #[arg(long, value_name = "DIR", requires = "cfg")]
    pub decoder: Option<PathBuf>,
}
