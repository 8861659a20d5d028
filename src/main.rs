use anyhow::{Context, Result};
use clap::Parser;
use singleton_detector::classpath::open_root;
use singleton_detector::cli::{Cli, Flags};
use singleton_detector::detector::Detector;
use singleton_detector::engine::ClassGraphEngine;
use singleton_detector::enumerate::enumerate_classes;
use singleton_detector::output::write_graph;
use std::io::Write;

fn main() -> Result<()> {
    // Help and version requests exit 0 here; usage errors print clap's
    // message plus usage and exit non-zero, before any work is done.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    run(&cli, &ClassGraphEngine)
}

fn run(cli: &Cli, engine: &dyn Detector) -> Result<()> {
    let flags = cli.flags();
    let prefix = cli.prefix();

    let root = open_root(&cli.input)
        .with_context(|| format!("failed to open classpath {}", cli.input.display()))?;

    let classes = enumerate_classes(root.as_ref(), &prefix, &mut |name| {
        if flags.verbose {
            println!("Found: {name}");
        }
    })
    .with_context(|| format!("failed to enumerate classes under {}", cli.input.display()))?;

    phase(&flags, "Processing... ");
    let report = engine.analyze(root.as_ref(), &prefix, &flags, &classes)?;

    phase(&flags, "done.\nGenerating output graph... ");
    write_graph(&cli.output, &report.graph_output)
        .with_context(|| format!("failed to write graph to {}", cli.output.display()))?;
    phase(&flags, "done.\n");

    if flags.show_stats {
        println!();
        println!("{}", report.stats_report(flags.verbose));
    }

    Ok(())
}

fn phase(flags: &Flags, marker: &str) {
    if flags.verbose {
        print!("{marker}");
        let _ = std::io::stdout().flush();
    }
}
