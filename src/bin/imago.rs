use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "imago", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a scene description without evaluating it.
    Validate(ValidateArgs),
    /// Evaluate a scene's image at one or more points.
    Eval(EvalArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Sample point as `x,y`; repeat the flag for several samples.
    #[arg(long = "at", value_parser = parse_point, required = true)]
    points: Vec<imago::Point>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Eval(args) => cmd_eval(args),
    }
}

fn parse_point(s: &str) -> Result<imago::Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{s}'"))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{x}'"))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{y}'"))?;
    Ok(imago::Point::new(x, y))
}

fn read_scene(path: &Path) -> anyhow::Result<imago::dsl::ImageExpr> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let mut text = String::new();
    BufReader::new(f)
        .read_to_string(&mut text)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    Ok(imago::dsl::ImageExpr::from_json_str(&text)?)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    scene.validate()?;
    eprintln!("ok: {}", args.in_path.display());
    Ok(())
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let image = scene.build()?;
    for p in args.points {
        let c = image.eval(p);
        println!("({}, {}) -> #{:02x}{:02x}{:02x}", p.x, p.y, c.r, c.g, c.b);
    }
    Ok(())
}
