use layer_deltas::check::*;
use layer_deltas::cli::Args;
use layer_deltas::deltas::*;
use layer_deltas::output::*;
use std::io::prelude::*;
use std::process::ExitCode;

fn main() -> std::io::Result<ExitCode> {
    let args = Args::cli_setup("layer_deltas");

    #[cfg(feature = "profile-with-puffin")]
    let _puffin_server = layer_deltas::cli::start_puffin_server()?;

    let layout = fixture::layout();
    let buffer = fixture::buffer();
    let groupings = if args.generated {
        generate_groupings(&layout)
    } else {
        fixture::groupings()
    };
    args.log(format_args!(
        "Aggregating {} groupings over {} deltas",
        groupings.len(),
        buffer.values().len()
    ));

    let values = aggregate_all(&buffer, &groupings);
    profiling::finish_frame!();

    if let Some(path) = &args.expected {
        args.log(format_args!("Checking: {:?}", path));
        let expected = read_expected(path)?;
        let mismatches = compare(&expected, &values, args.epsilon);
        let passed =
            report(&mut std::io::stdout().lock(), &mismatches, values.len())?;
        return Ok(if passed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut output = std::io::BufWriter::new(std::io::stdout().lock());
    write_values(&mut output, &values, args.format, &layout.output_bounds())?;
    output.flush()?;
    Ok(ExitCode::SUCCESS)
}
