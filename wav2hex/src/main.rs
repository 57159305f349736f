use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::PathBuf,
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use wavhex::{converter::rescale_to_12bit, read_header, writer};

#[derive(Parser)]
#[command(version)]
/// Converts 16 bit PCM wav files to 12 bit DAC samples
pub struct Args {
    #[arg(short, long)]
    /// Path to the input wav file
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    let args = Args::parse();
    let Some(input) = args.input else {
        println!("Input file isn't specified");
        exit(1);
    };

    let mut file = File::open(&input).context("error opening the input file")?;
    let header = match read_header(&mut file) {
        Ok(header) => header,
        Err(err) => {
            debug!("rejected {}: {err}", input.display());
            println!("File hasn't wav format");
            exit(1);
        }
    };

    println!(
        "Format: {}\nChannels: {}\nFrequency: {}\nBits per sample: {}",
        header.audio_format, header.channel_count, header.sample_rate, header.bits_per_sample
    );

    if let Err(err) = header.check_supported() {
        debug!("rejected {}: {err}", input.display());
        println!("File has not supported format");
        exit(1);
    }

    let mut data = Vec::with_capacity(header.data_size as usize);
    Read::by_ref(&mut file)
        .take(header.data_size.into())
        .read_to_end(&mut data)
        .context("error reading sample data")?;
    drop(file);
    let rescaled = rescale_to_12bit(&data, header.channel_count);

    println!("\nMin sample: {}\nMax sample: {}", rescaled.min, rescaled.max);

    // the outputs are only created once the format checks have passed
    let bin_path = writer::output_path(&input, "bin");
    let mut bin_file =
        BufWriter::new(File::create(&bin_path).context("error creating the bin file")?);
    writer::write_bin(&mut bin_file, &rescaled.samples).context("error writing the bin file")?;
    bin_file.flush().context("error writing the bin file")?;

    let hex_path = writer::output_path(&input, "hex");
    let mut hex_file =
        BufWriter::new(File::create(&hex_path).context("error creating the hex file")?);
    writer::write_hex(&mut hex_file, &rescaled.samples).context("error writing the hex file")?;
    hex_file.flush().context("error writing the hex file")?;

    info!(
        "wrote {} samples to {} and {}",
        rescaled.samples.len(),
        bin_path.display(),
        hex_path.display()
    );
    Ok(())
}
