use std::{
    fs,
    io::{BufWriter, Write},
    process::ExitCode,
    time::{SystemTime, UNIX_EPOCH},
};

use lifegif::{GifRecorder, Grid, RunLengthEncoded, Seeding, error::Result};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

mod options;
mod stats;

use stats::Recorder;

fn args_to_seeding(args: &options::Args) -> Result<Seeding> {
    if let Some(file_name) = args.input_file() {
        let encoded_str = fs::read_to_string(file_name)?;
        let alive = RunLengthEncoded::default().decode(&encoded_str)?;
        info!("loaded {} cells from {}", alive.len(), file_name.display());
        return Ok(Seeding::Pattern(alive));
    }
    Ok(args.fill().clone())
}

/// Seconds since the epoch, for runs without an explicit seed
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Writes `generations` frames, the first being the state `grid` starts in
///
/// `grid` is advanced once per frame, so it ends on the generation after the last frame
fn simulate<W: Write, R: Recorder>(
    grid: &mut Grid,
    generations: usize,
    recorder: &mut GifRecorder<W>,
    stats: &mut R,
) -> Result<()> {
    for _ in 0..generations {
        recorder.capture(grid)?;
        grid.next_generation();

        stats.record(grid.alive_count());
        if stats.has_report() {
            info!("{}", stats.report().as_ref());
        }
    }
    Ok(())
}

fn run(args: &options::Args) -> Result<()> {
    let (grid_w, grid_h) = args.grid_size();
    let seed = args.seed().unwrap_or_else(clock_seed);
    info!(
        "grid {}x{}, radius {}, {} generations, seed {}",
        grid_w,
        grid_h,
        args.radius(),
        args.generations(),
        seed
    );

    let mut grid = Grid::new(grid_w, grid_h, args.radius());
    let mut rng = StdRng::seed_from_u64(seed);
    args_to_seeding(args)?.populate(&mut grid, &mut rng);
    info!("alive: {}", grid.alive_count());

    let file = fs::File::create(args.gif_file())?;
    let mut recorder = GifRecorder::new(BufWriter::new(file), grid_w, grid_h, args.delay())?;
    let mut stats = stats::SwitchRecorder::new(grid.alive_count(), args.stats_file().is_some());
    simulate(&mut grid, args.generations(), &mut recorder, &mut stats)?;

    let frames = recorder.frames();
    recorder.finish()?.flush()?;
    info!("wrote {} frames to {}", frames, args.gif_file().display());

    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("lifegif final generation");
        fs::write(file_name, encoder.encode(&grid))?;
        info!("wrote final generation to {}", file_name.display());
    }
    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
        info!("wrote stats to {}", file_name.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match options::Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", options::usage());
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_frames(bytes: &[u8]) -> Vec<Vec<u8>> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::Indexed);
        let mut decoder = options.read_info(bytes).unwrap();

        let mut frames = Vec::new();
        while let Some(frame) = decoder.read_next_frame().unwrap() {
            frames.push(frame.buffer.to_vec());
        }
        frames
    }

    fn pixels(width: usize, height: usize, alive: &[(usize, usize)]) -> Vec<u8> {
        let mut pixels = vec![0; width * height];
        for &(x, y) in alive {
            pixels[y * width + x] = 1;
        }
        pixels
    }

    #[test]
    fn first_frame_is_the_seeded_state() {
        let mut grid = Grid::new(7, 7, 1);
        for x in 2..=4 {
            grid.set_cell(x, 3, true);
        }
        let mut recorder = GifRecorder::new(Vec::new(), 7, 7, 1).unwrap();
        let mut stats = stats::SimpleRecord::new(grid.alive_count());

        simulate(&mut grid, 2, &mut recorder, &mut stats).unwrap();

        let frames = decode_frames(&recorder.finish().unwrap());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0], pixels(7, 7, &[(2, 3), (3, 3), (4, 3)]));
        assert_eq!(
            frames[1],
            pixels(7, 7, &[(3, 2), (2, 3), (3, 3), (4, 3), (3, 4)])
        );
        assert!(stats.report().contains("gens:2,"));
    }

    #[test]
    fn zero_generations_write_no_frames() {
        let mut grid = Grid::new(3, 3, 1);
        grid.set_cell(1, 1, true);
        let mut recorder = GifRecorder::new(Vec::new(), 3, 3, 1).unwrap();
        let mut stats = stats::SimpleRecord::new(1);

        simulate(&mut grid, 0, &mut recorder, &mut stats).unwrap();

        assert_eq!(recorder.frames(), 0);
        assert!(grid.get_cell(1, 1));
    }
}
