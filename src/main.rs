//! Piece Rotation Inspector
//!
//! Prints the piece catalogue, renders the grid of any piece at its four
//! rotations, shows what a flip does to a piece, and audits the flip tables
//! against the authored grids.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use piece_rotation::color::Handedness;
use piece_rotation::grid::format_grid;
use piece_rotation::{
    codec, flip, Axis, CellOffset, Category, ColorCombination, EngineProfile, Piece, PieceType, RotationEngine,
    RotationState, ShapeClass,
};

/// Inspects piece grids, rotations and flips.
#[derive(Parser)]
#[command(name = "piece-rotation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every catalogued piece type with its encoded id.
    Catalog {
        /// Only list this shape class.
        #[arg(long, value_enum)]
        class: Option<ClassArg>,
    },
    /// Render a piece at one or all rotations.
    Show {
        #[command(flatten)]
        piece: PieceArgs,
        /// Rotation index; all four when omitted.
        #[arg(long, short)]
        rotation: Option<u8>,
    },
    /// Flip a piece and show the result and the offset change.
    Flip {
        #[command(flatten)]
        piece: PieceArgs,
        #[arg(long, short, default_value_t = 0)]
        rotation: u8,
        #[arg(long, short, value_enum, default_value_t = AxisArg::Horizontal)]
        axis: AxisArg,
    },
    /// Check the flip tables and rotation order against the authored grids.
    Verify,
}

#[derive(Args)]
struct PieceArgs {
    #[arg(value_enum)]
    class: ClassArg,
    /// Category name within the class, e.g. `gamma` or `p-reverse`.
    category: String,
    #[arg(long, short, default_value_t = 0)]
    sub: u8,
    /// Paint 1-15.
    #[arg(long, default_value_t = 1)]
    paint: u8,
    #[arg(long, value_enum, default_value_t = HandArg::Neutral)]
    hand: HandArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum ClassArg {
    Tromino,
    Tetromino,
    Tetracube,
    Pentomino,
    Special,
}

impl From<ClassArg> for ShapeClass {
    fn from(class: ClassArg) -> Self {
        match class {
            ClassArg::Tromino => Self::Tromino,
            ClassArg::Tetromino => Self::Tetromino,
            ClassArg::Tetracube => Self::Tetracube,
            ClassArg::Pentomino => Self::Pentomino,
            ClassArg::Special => Self::Special,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HandArg {
    Neutral,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AxisArg {
    Horizontal,
    Vertical,
}

impl From<AxisArg> for Axis {
    fn from(axis: AxisArg) -> Self {
        match axis {
            AxisArg::Horizontal => Self::Horizontal,
            AxisArg::Vertical => Self::Vertical,
        }
    }
}

impl PieceArgs {
    fn piece_type(&self) -> Result<PieceType, String> {
        let class = ShapeClass::from(self.class);
        let category = Category::from_name(class, &self.category)
            .ok_or_else(|| format!("no {} named {:?}", class.name(), self.category))?;
        let hand = match self.hand {
            HandArg::Neutral => Handedness::Neutral,
            HandArg::Left => Handedness::Left,
            HandArg::Right => Handedness::Right,
        };
        let color = ColorCombination::new(self.paint, hand)
            .ok_or_else(|| format!("paint {} is not 1-15", self.paint))?;
        Ok(PieceType::new(category, self.sub, color))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("piece_rotation=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Catalog { class } => Ok(run_catalog(class.map(ShapeClass::from))),
        Command::Show { piece, rotation } => piece.piece_type().and_then(|kind| run_show(kind, rotation)),
        Command::Flip { piece, rotation, axis } => {
            piece.piece_type().and_then(|kind| run_flip(kind, rotation, axis.into()))
        }
        Command::Verify => run_verify(),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn ready_engine() -> Result<RotationEngine, String> {
    let mut engine = RotationEngine::new(EngineProfile::Universal);
    engine.finalize().map_err(|e| e.to_string())?;
    Ok(engine)
}

/// Lists catalogued types, one per line.
fn run_catalog(class: Option<ShapeClass>) -> String {
    let mut output = String::new();
    for kind in PieceType::catalog(ColorCombination::RED) {
        if class.is_some_and(|class| kind.shape_class() != class) {
            continue;
        }
        output.push_str(&format!("{}  {}/{}\n", codec::encode(&kind), kind.category, kind.subcategory));
    }
    output
}

/// Renders one rotation, or all four, of a piece.
fn run_show(kind: PieceType, rotation: Option<u8>) -> Result<String, String> {
    let mut engine = ready_engine()?;
    let rotations = match rotation {
        Some(rotation) => rotation..rotation + 1,
        None => 0..4,
    };

    let mut output = String::new();
    for rotation in rotations {
        let mut piece = Piece::with_rotation(kind, RotationState::at(rotation));
        engine.turn0(&mut piece).map_err(|e| e.to_string())?;
        let bounds = piece.bounding_box();
        output.push_str(&format!(
            "{kind} rotation {} ({}x{}x{})\n",
            piece.rotation().index,
            bounds.width,
            bounds.height,
            bounds.depth
        ));
        if let Some(grid) = piece.grid() {
            output.push_str(&format_grid(grid));
        }
        output.push('\n');
    }
    Ok(output)
}

/// Flips a piece once and shows both states.
fn run_flip(kind: PieceType, rotation: u8, axis: Axis) -> Result<String, String> {
    let mut engine = ready_engine()?;
    let mut piece = Piece::with_rotation(kind, RotationState::at(rotation));
    engine.turn0(&mut piece).map_err(|e| e.to_string())?;

    let mut output = format!("{} rotation {}\n", piece.kind(), piece.rotation().index);
    if let Some(grid) = piece.grid() {
        output.push_str(&format_grid(grid));
    }

    let mut offset = CellOffset::default();
    match axis {
        Axis::Horizontal => engine.flip_horizontal(&mut piece, &mut offset),
        Axis::Vertical => engine.flip_vertical(&mut piece, &mut offset),
    }
    .map_err(|e| e.to_string())?;

    output.push_str(&format!(
        "\n{:?} flip -> {} rotation {}, offset ({}, {})\n",
        axis,
        piece.kind(),
        piece.rotation().index,
        offset.x,
        offset.y
    ));
    if let Some(grid) = piece.grid() {
        output.push_str(&format_grid(grid));
    }
    Ok(output)
}

/// Runs the flip-table audit.
fn run_verify() -> Result<String, String> {
    let findings = flip::audit();
    if findings.is_empty() {
        let families = PieceType::catalog(ColorCombination::RED).count();
        return Ok(format!("flip tables consistent for {families} families\n"));
    }
    Err(findings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(class: ShapeClass, name: &str) -> PieceType {
        PieceType::plain(Category::from_name(class, name).unwrap(), ColorCombination::RED)
    }

    #[test]
    fn test_catalog_lists_every_family() {
        let output = run_catalog(None);
        assert_eq!(output.lines().count(), 43);
        assert_eq!(run_catalog(Some(ShapeClass::Tetracube)).lines().count(), 9);
    }

    #[test]
    fn test_show_snapshot() {
        let output = run_show(kind(ShapeClass::Tetromino, "t"), None).unwrap();
        insta::assert_snapshot!(output, @r"
        tetromino t/0 [paint 1] rotation 0 (3x3x1)
        .#.
        ###
        ...

        tetromino t/0 [paint 1] rotation 1 (3x3x1)
        .#.
        .##
        .#.

        tetromino t/0 [paint 1] rotation 2 (3x3x1)
        ...
        ###
        .#.

        tetromino t/0 [paint 1] rotation 3 (3x3x1)
        .#.
        ##.
        .#.
        ");
    }

    #[test]
    fn test_flip_reports_offset() {
        let output = run_flip(kind(ShapeClass::Tetromino, "gamma"), 1, Axis::Horizontal).unwrap();
        assert!(output.contains("tetromino gun/0 [paint 1] rotation 1, offset (1, 0)"), "{output}");
    }

    #[test]
    fn test_unflippable_is_an_error() {
        let err = run_flip(kind(ShapeClass::Special, "push-down"), 0, Axis::Vertical).unwrap_err();
        assert!(err.contains("cannot be flipped"), "{err}");
    }

    #[test]
    fn test_verify_passes() {
        assert_eq!(run_verify().unwrap(), "flip tables consistent for 43 families\n");
    }

    #[test]
    fn test_piece_args_parse() {
        let cli = Cli::try_parse_from(["piece-rotation", "show", "pentomino", "P-Reverse", "--hand", "left"]).unwrap();
        let Command::Show { piece, rotation } = cli.command else {
            panic!("expected show");
        };
        assert_eq!(rotation, None);
        let kind = piece.piece_type().unwrap();
        assert_eq!(kind.category, Category::from_name(ShapeClass::Pentomino, "p-reverse").unwrap());
        assert_eq!(kind.color.handedness(), Handedness::Left);
    }
}
