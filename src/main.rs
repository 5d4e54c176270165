use clap::Parser;
use rect_packer::engine::PackEngine;
use rect_packer::pool::SpacePolicy;
use rect_packer::render;
use rect_packer::types::Rect;

#[derive(Parser)]
#[command(name = "rect_packer", about = "2D guillotine rectangle packer")]
struct Cli {
    /// Container dimensions (WxH, e.g. 1200x800)
    #[arg(long)]
    container: String,

    /// Items as WxH or WxH:qty (e.g. 400x300:2 250x180)
    #[arg(long = "items", num_args = 1..)]
    items: Vec<String>,

    /// Space selection policy: first-fit, min-gap, or min-distance
    #[arg(long, default_value = "first-fit", value_parser = parse_policy)]
    policy: SpacePolicy,

    /// Retry unplaceable items rotated 90 degrees
    #[arg(long)]
    rotate: bool,

    /// Show ASCII layout of the packed container
    #[arg(long)]
    layout: bool,
}

fn parse_policy(s: &str) -> Result<SpacePolicy, String> {
    match s {
        "first-fit" => Ok(SpacePolicy::FirstFit),
        "min-gap" => Ok(SpacePolicy::MinGap),
        "min-distance" => Ok(SpacePolicy::MinDistance),
        _ => Err(format!(
            "invalid policy '{}', expected: first-fit, min-gap, or min-distance",
            s
        )),
    }
}

fn parse_dimensions(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!("invalid dimensions '{}', expected WxH", s));
    }
    let width = parts[0]
        .parse::<u32>()
        .map_err(|_| format!("invalid width in '{}'", s))?;
    let height = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid height in '{}'", s))?;
    if width == 0 || height == 0 {
        return Err(format!("dimensions must be non-zero in '{}'", s));
    }
    Ok(Rect::new(width, height))
}

fn parse_item(s: &str) -> Result<(Rect, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.as_slice() {
        [dims] => Ok((parse_dimensions(dims)?, 1)),
        [dims, qty] => {
            let qty = qty
                .parse::<u32>()
                .map_err(|_| format!("invalid quantity in '{}'", s))?;
            if qty == 0 {
                return Err(format!("quantity must be non-zero in '{}'", s));
            }
            Ok((parse_dimensions(dims)?, qty))
        }
        _ => Err(format!("invalid item '{}', expected WxH or WxH:qty", s)),
    }
}

fn main() {
    let cli = Cli::parse();

    let container = parse_dimensions(&cli.container).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    let items: Vec<(Rect, u32)> = cli
        .items
        .iter()
        .map(|s| parse_item(s))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

    // Validate all items fit in the container (considering rotation)
    for (rect, _) in &items {
        let fits_normal = rect.fits_in(&container);
        let fits_rotated = cli.rotate && rect.rotated().fits_in(&container);
        if !fits_normal && !fits_rotated {
            eprintln!("Error: item {} does not fit in container {}", rect, container);
            std::process::exit(1);
        }
    }

    let mut engine = PackEngine::new();
    engine.set_container(container.width, container.height);
    engine.set_policy(cli.policy);
    if cli.rotate {
        engine.enable_rotation();
    }
    for (rect, qty) in &items {
        for _ in 0..*qty {
            engine.add_item(rect.width, rect.height);
        }
    }

    if let Err(e) = engine.pack() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Output results
    for p in engine.packed_items() {
        let rot = if p.rotated { " [rotated]" } else { "" };
        println!("{} @ ({}, {}){}", p.rect, p.x, p.y, rot);
    }
    if cli.layout {
        print!("{}", render::render_layout(container, engine.packed_items()));
    }
    println!();

    println!(
        "Summary: {} item{} packed, {:.1}% waste",
        engine.packed_count(),
        if engine.packed_count() == 1 { "" } else { "s" },
        engine.waste_percent(),
    );
}
