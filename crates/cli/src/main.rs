use anyhow::{Context, Result, bail};
use catalog::{Catalog, Color, Product, Size};
use clap::{Parser, Subcommand};
use colored::Colorize;
use principles::{
    ClassicPrinter, Document, Fax, Journal, MultifunctionMachine, MultifunctionPrinter, Persistence,
    Person, Photocopier, Printer, Rectangle, Relationships, Research, Scanner, Shape, Square,
    set_and_measure,
};
use specification::product::{ColorSpecification, NameContainsSpecification, SizeSpecification};
use specification::{AllOf, BetterFilter, Filter, ProductFilter, Specification};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// solid-demos - Design principle demonstrations
#[derive(Parser)]
#[command(name = "solid-demos")]
#[command(about = "Runnable demonstrations of the SOLID design principles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open/closed: filter products with composable specifications
    OpenClosed {
        /// Catalog file (`name::color::size` lines, or .json); defaults to the sample catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Also select products of this color (red, green, blue)
        #[arg(long)]
        color: Option<Color>,

        /// Also select products of this size (small, medium, large, yuge)
        #[arg(long)]
        size: Option<Size>,

        /// Also select products whose name contains this text
        #[arg(long)]
        name: Option<String>,
    },

    /// Single responsibility: a journal and a separate persistence type
    SingleResponsibility {
        /// Where to save the journal (skipped if not given)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Replace the output file if it already exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Liskov substitution: rectangles and squares
    Liskov,

    /// Interface segregation: printers, scanners and fax machines
    InterfaceSegregation,

    /// Dependency inversion: research over a relationship browser
    DependencyInversion {
        /// Whose children to look up
        #[arg(long, default_value = "John")]
        parent: String,
    },

    /// Run every demonstration in order
    All,

    /// Time sequential against parallel filtering on a random catalog
    Benchmark {
        /// Number of products in the generated catalog
        #[arg(long, default_value = "100000")]
        items: usize,

        /// Number of timed runs per filter
        #[arg(long, default_value = "50")]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::OpenClosed {
            catalog,
            color,
            size,
            name,
        } => handle_open_closed(catalog, color, size, name)?,
        Commands::SingleResponsibility { output, overwrite } => {
            handle_single_responsibility(output, overwrite)?
        }
        Commands::Liskov => handle_liskov(),
        Commands::InterfaceSegregation => handle_interface_segregation(),
        Commands::DependencyInversion { parent } => handle_dependency_inversion(&parent),
        Commands::All => {
            handle_single_responsibility(None, false)?;
            handle_open_closed(None, None, None, None)?;
            handle_liskov();
            handle_interface_segregation();
            handle_dependency_inversion("John");
        }
        Commands::Benchmark { items, iterations } => handle_benchmark(items, iterations)?,
    }

    Ok(())
}

/// Handle the 'open-closed' command
fn handle_open_closed(
    catalog_path: Option<PathBuf>,
    color: Option<Color>,
    size: Option<Size>,
    name: Option<String>,
) -> Result<()> {
    let catalog = match &catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?
        }
        None => Catalog::sample(),
    };
    let products = catalog.products();

    print_header("Open/closed principle");

    let pf = ProductFilter;
    println!("Green products (old):");
    for p in pf.filter_by_color(products, Color::Green) {
        println!("\t-{} is green", p.name);
    }

    let bf = BetterFilter;
    println!("Green products (new):");
    for p in bf.filter(products, &ColorSpecification::new(Color::Green)) {
        println!("\t-{} is green", p.name);
    }

    println!("Large products:");
    for p in bf.filter(products, &SizeSpecification::new(Size::Large)) {
        println!("\t-{} is large", p.name);
    }

    println!("Large, blue products:");
    let large_blue = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
    for p in bf.filter(products, &large_blue) {
        println!("\t-{} is large AND blue", p.name);
    }

    // Criteria from the command line, combined at runtime
    let mut criteria: AllOf<Product> = AllOf::new();
    if let Some(color) = color {
        criteria.push(Box::new(ColorSpecification::new(color)));
    }
    if let Some(size) = size {
        criteria.push(Box::new(SizeSpecification::new(size)));
    }
    if let Some(name) = name {
        criteria.push(Box::new(NameContainsSpecification::new(name)));
    }

    if !criteria.is_empty() {
        println!("Products matching {}:", criteria.name().bold());
        let selected = bf.filter(products, &criteria);
        if selected.is_empty() {
            println!("\t{}", "(none)".dimmed());
        }
        for p in selected {
            println!("\t-{}", p);
        }
    }

    Ok(())
}

/// Handle the 'single-responsibility' command
fn handle_single_responsibility(output: Option<PathBuf>, overwrite: bool) -> Result<()> {
    print_header("Single responsibility principle");

    let mut j = Journal::new();
    j.add_entry("I did nothing today");
    let nothing = j.add_entry("I did nothing today again");
    println!("{}", j);

    j.remove_entry(nothing)?;
    println!("======");
    println!("{}", j);

    if let Some(path) = output {
        Persistence
            .save(&j, &path, overwrite)
            .with_context(|| format!("Failed to save journal to {}", path.display()))?;
        println!("{} Saved journal to {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Handle the 'liskov' command
fn handle_liskov() {
    print_header("Liskov substitution principle");

    let mut rc = Rectangle::default();
    let (expected, actual) = set_and_measure(&mut rc);
    println!("Expected area: {}, actual area: {}", expected, actual);

    // A square has its own constructor; it never goes through set_and_measure
    let shapes: [Shape; 2] = [rc.into(), Square::new(4).into()];
    for shape in &shapes {
        println!("{} -> area {}", shape, shape.area());
    }
}

/// Handle the 'interface-segregation' command
fn handle_interface_segregation() {
    print_header("Interface segregation principle");

    let doc = Document::new("Quarterly report");

    let printers: [(&str, &dyn Printer); 3] = [
        ("classic printer", &ClassicPrinter),
        ("photocopier", &Photocopier),
        ("multifunction printer", &MultifunctionPrinter),
    ];
    for (label, printer) in printers {
        let out = printer.print(&doc);
        println!("{}{}: {:?} \"{}\"", "• ".green(), label, out.action, out.document);
    }

    let machine = MultifunctionMachine::new(ClassicPrinter, Photocopier);
    for out in [machine.print(&doc), machine.scan(&doc), machine.fax(&doc)] {
        println!(
            "{}multifunction machine: {:?} via {}",
            "• ".cyan(),
            out.action,
            out.device
        );
    }
}

/// Handle the 'dependency-inversion' command
fn handle_dependency_inversion(parent_name: &str) {
    print_header("Dependency inversion principle");

    let parent = Person::new("John");
    let child1 = Person::new("Chris");
    let child2 = Person::new("Matt");

    let mut rels = Relationships::new();
    rels.add_parent_and_child(&parent, &child1);
    rels.add_parent_and_child(&parent, &child2);

    let research = Research::new(&rels, parent_name);
    if research.findings().is_empty() {
        println!("No children found for {}", parent_name);
    }
    for line in research.findings() {
        println!("{}", line);
    }
}

/// Handle the 'benchmark' command
fn handle_benchmark(items: usize, iterations: usize) -> Result<()> {
    if iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    info!("Generating {} random products", items);
    let catalog = random_catalog(items);
    let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Blue));
    let bf = BetterFilter;

    let mut sequential = Vec::with_capacity(iterations);
    let mut parallel = Vec::with_capacity(iterations);
    let mut selected = 0;
    for _ in 0..iterations {
        let start = Instant::now();
        selected = bf.filter(catalog.products(), &spec).len();
        sequential.push(start.elapsed());

        let start = Instant::now();
        let par_selected = bf.par_filter(catalog.products(), &spec).len();
        parallel.push(start.elapsed());

        if par_selected != selected {
            bail!(
                "Parallel filter selected {} products, sequential selected {}",
                par_selected,
                selected
            );
        }
    }

    println!(
        "{}",
        format!(
            "Benchmark: {} products, {} selected by {}",
            items,
            selected,
            spec.name()
        )
        .bold()
        .blue()
    );
    print_timings("filter", &mut sequential);
    print_timings("par_filter", &mut parallel);

    Ok(())
}

fn random_catalog(len: usize) -> Catalog {
    (0..len)
        .map(|i| {
            let color = Color::ALL[rand::random::<u32>() as usize % Color::ALL.len()];
            let size = Size::ALL[rand::random::<u32>() as usize % Size::ALL.len()];
            Product::new(format!("Product {}", i), color, size)
        })
        .collect()
}

/// Average, P50, P95 and P99 of a set of timings
fn print_timings(label: &str, timings: &mut [Duration]) {
    timings.sort();
    let total: Duration = timings.iter().sum();
    let avg = total / timings.len() as u32;
    let p50 = timings[timings.len() / 2];
    let p95 = timings[((timings.len() as f32 * 0.95) as usize).min(timings.len() - 1)];
    let p99 = timings[((timings.len() as f32 * 0.99) as usize).min(timings.len() - 1)];

    println!(
        "{}{}: avg {:?}, p50 {:?}, p95 {:?}, p99 {:?}",
        "• ".green(),
        label,
        avg,
        p50,
        p95,
        p99
    );
}

fn print_header(title: &str) {
    println!("{}", format!("== {} ==", title).bold().blue());
}
