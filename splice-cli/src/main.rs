use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "splice", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Preview the ripple caused by deleting clips.
    Delete(DeleteArgs),
    /// Preview the ripple caused by inserting material.
    Insert(InsertArgs),
    /// Preview the ripple caused by changing a clip's duration.
    Trim(TrimArgs),
    /// Preview the ripple caused by moving a clip.
    Move(MoveArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input sequence JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Fan the shift out to every track.
    #[arg(long, default_value_t = false)]
    all_tracks: bool,
}

#[derive(Args, Debug)]
struct DeleteArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Clip id to delete (repeatable).
    #[arg(long = "clip", required = true)]
    clips: Vec<String>,
}

#[derive(Args, Debug)]
struct InsertArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Target track id.
    #[arg(long)]
    track: String,

    /// Insertion position in seconds.
    #[arg(long)]
    at: f64,

    /// Inserted duration in seconds (> 0).
    #[arg(long)]
    duration: f64,
}

#[derive(Args, Debug)]
struct TrimArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Trimmed clip id.
    #[arg(long)]
    clip: String,

    /// Duration before the trim, in seconds.
    #[arg(long)]
    old_duration: f64,

    /// Duration after the trim, in seconds.
    #[arg(long)]
    new_duration: f64,
}

#[derive(Args, Debug)]
struct MoveArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Moved clip id.
    #[arg(long)]
    clip: String,

    /// Position before the move, in seconds.
    #[arg(long)]
    from: f64,

    /// Position after the move, in seconds.
    #[arg(long)]
    to: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Delete(args) => cmd_delete(args),
        Command::Insert(args) => cmd_insert(args),
        Command::Trim(args) => cmd_trim(args),
        Command::Move(args) => cmd_move(args),
    }
}

fn load_sequence(path: &Path) -> anyhow::Result<splice::Sequence> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("read sequence '{}'", path.display()))?;
    let seq = splice::Sequence::from_json_str(&json)?;
    seq.validate()?;
    Ok(seq)
}

fn mode(common: &CommonArgs) -> splice::RippleMode {
    splice::RippleMode {
        enabled: true,
        all_tracks: common.all_tracks,
    }
}

fn emit(result: &splice::RippleResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    eprintln!(
        "{} clip(s) affected, net delta {:+}s",
        result.affected_clips.len(),
        result.total_delta
    );
    Ok(())
}

fn cmd_delete(args: DeleteArgs) -> anyhow::Result<()> {
    let seq = load_sequence(&args.common.in_path)?;
    let result = splice::delete_ripple(&seq, mode(&args.common), &args.clips)?;
    emit(&result)
}

fn cmd_insert(args: InsertArgs) -> anyhow::Result<()> {
    let seq = load_sequence(&args.common.in_path)?;
    let result = splice::insert_ripple(
        &seq,
        mode(&args.common),
        &args.track,
        args.at,
        args.duration,
    )?;
    emit(&result)
}

fn cmd_trim(args: TrimArgs) -> anyhow::Result<()> {
    let seq = load_sequence(&args.common.in_path)?;
    let result = splice::trim_ripple(
        &seq,
        mode(&args.common),
        &args.clip,
        args.old_duration,
        args.new_duration,
    )?;
    emit(&result)
}

fn cmd_move(args: MoveArgs) -> anyhow::Result<()> {
    let seq = load_sequence(&args.common.in_path)?;
    let result = splice::move_ripple(&seq, mode(&args.common), &args.clip, args.from, args.to)?;
    emit(&result)
}
