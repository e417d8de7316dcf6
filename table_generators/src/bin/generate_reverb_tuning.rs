use clap::Parser;
use rand::SeedableRng;
use rand::rngs::{StdRng, SysRng};
use reverb_tuning::{
    float_table_decl, index_table_decl, prime_offset_sequence, sum_less_than, unity_gain_coeffs,
};

/// Largest delay-line offset the sparse channels may reach; the channel
/// length is however many partial prime sums fit under it.
const OFFSET_BOUND: usize = 1 << 14;

const CHANNELS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

#[derive(Parser, Debug)]
#[command(name = "Reverb Tuning Generator")]
#[command(about = "Generates tap gain and delay offset tables for the diffuser network", long_about = None)]
struct Args {
    /// RNG seed for reproducible tables; omit for fresh tables every run
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = "1028")]
    dense_size: usize,

    #[arg(long, default_value = "290")]
    sparse_size: usize,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => {
            let mut rng_seed = [0; 32];
            rng_seed[0..8].clone_from_slice(&seed.to_ne_bytes());
            StdRng::from_seed(rng_seed)
        }
        None => StdRng::try_from_rng(&mut SysRng).expect("failed to seed RNG from OS entropy"),
    };

    let max_idx =
        sum_less_than(OFFSET_BOUND).expect("partial prime sum table too short for OFFSET_BOUND");

    eprintln!("Generating reverb tuning tables:");
    eprintln!("  DENSE_SIZE: {}", args.dense_size);
    eprintln!("  SPARSE_SIZE: {}", args.sparse_size);
    eprintln!("  OFFSET_BOUND: {} (channel length: {})", OFFSET_BOUND, max_idx);
    match args.seed {
        Some(seed) => eprintln!("  SEED: {}", seed),
        None => eprintln!("  SEED: from OS entropy"),
    }
    eprintln!();

    let dense_coeffs =
        unity_gain_coeffs(&mut rng, args.dense_size).expect("dense table size must be at least 1");
    let sparse_coeffs = unity_gain_coeffs(&mut rng, args.sparse_size)
        .expect("sparse table size must be at least 1");

    println!("{}", float_table_decl("DENSE_COEFFS", &dense_coeffs));
    println!();
    println!("{}", float_table_decl("SPARSE_COEFFS", &sparse_coeffs));
    println!();
    println!();

    println!("// SPARSE MULTICHANNEL:");

    let channel_offsets: Vec<Vec<usize>> = CHANNELS
        .iter()
        .map(|_| prime_offset_sequence(&mut rng, max_idx))
        .collect();

    for (channel, offsets) in CHANNELS.iter().zip(&channel_offsets) {
        println!("{}", index_table_decl(&format!("SPARSE_{channel}"), offsets));
        println!();
    }

    let channel_coeffs: Vec<Vec<f64>> = CHANNELS
        .iter()
        .map(|_| {
            unity_gain_coeffs(&mut rng, max_idx).expect("channel length must be at least 1")
        })
        .collect();

    for (i, (channel, coeffs)) in CHANNELS.iter().zip(&channel_coeffs).enumerate() {
        println!(
            "{}",
            float_table_decl(&format!("SPARSE_{channel}_COEFFS"), coeffs)
        );
        if i + 1 < CHANNELS.len() {
            println!();
        }
    }

    eprintln!();
    eprintln!("Sanity checks:");
    eprintln!(
        "  DENSE_COEFFS sum: {:.12} (expected: ~1.0)",
        dense_coeffs.iter().sum::<f64>()
    );
    eprintln!(
        "  SPARSE_COEFFS sum: {:.12} (expected: ~1.0)",
        sparse_coeffs.iter().sum::<f64>()
    );
    for (channel, offsets) in CHANNELS.iter().zip(&channel_offsets) {
        let monotonic = offsets.windows(2).all(|pair| pair[0] < pair[1]);
        eprintln!(
            "  SPARSE_{} strictly increasing: {} (last offset: {})",
            channel,
            monotonic,
            offsets.last().copied().unwrap_or(0)
        );
    }
    for (channel, coeffs) in CHANNELS.iter().zip(&channel_coeffs) {
        eprintln!(
            "  SPARSE_{}_COEFFS sum: {:.12} (expected: ~1.0)",
            channel,
            coeffs.iter().sum::<f64>()
        );
    }
}
