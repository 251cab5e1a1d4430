use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use wyag::cmd;

/// The stupid content tracker
#[derive(Parser, Debug)]
#[command(name = "wyag", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Init {
        directory: Option<PathBuf>,
    },
    CatFile {
        kind: String,
        name: String,
    },
    HashObject {
        #[arg(short = 't', default_value = "blob")]
        kind: String,
        #[arg(short = 'w')]
        write: bool,
        path: PathBuf,
    },
    Log {
        #[arg(default_value = "HEAD")]
        commit: String,
    },
    LsTree {
        #[arg(short = 'r')]
        recurse: bool,
        tree: String,
    },
    Checkout {
        name: String,
        path: PathBuf,
    },
    ShowRef {
        #[arg(long = "with-hash")]
        with_hash: bool,
    },
    Tag {
        #[arg(short = 'a')]
        annotate: bool,
        #[arg(long = "name")]
        name: Option<String>,
        #[arg(long = "object", default_value = "HEAD")]
        object: String,
    },
    RevParse {
        #[arg(long = "type")]
        kind: Option<String>,
        name: String,
    },
    LsFiles {
        #[arg(short = 'v')]
        verbose: bool,
    },
}

fn run() -> wyag::error::Result<()> {
    let args = Args::parse();
    let cwd = std::env::current_dir()?;

    match args.command {
        Command::Init { directory } => {
            let path = directory.unwrap_or_else(|| cwd.clone());
            cmd::init::run(&path)
        }
        Command::CatFile { kind, name } => cmd::cat_file::run(&cwd, &kind, &name),
        Command::HashObject { kind, write, path } => {
            let id = cmd::hash_object::run(&cwd, &kind, write, &path)?;
            println!("{id}");
            Ok(())
        }
        Command::Log { commit } => cmd::log::run(&cwd, &commit),
        Command::LsTree { recurse, tree } => cmd::ls_tree::run(&cwd, &tree, recurse),
        Command::Checkout { name, path } => cmd::checkout::run(&cwd, &name, &path),
        Command::ShowRef { with_hash } => cmd::show_ref::run(&cwd, with_hash),
        Command::Tag {
            annotate,
            name,
            object,
        } => cmd::tag::run(&cwd, name.as_deref(), Some(object.as_str()), annotate),
        Command::RevParse { kind, name } => cmd::rev_parse::run(&cwd, &name, kind.as_deref()),
        Command::LsFiles { verbose } => cmd::ls_files::run(&cwd, verbose),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("wyag: {err}");
            ExitCode::FAILURE
        }
    }
}
