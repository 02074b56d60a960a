use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rs_name_core::error::ListKind;
use rs_name_core::model::generation_input::GeneratorConfig;
use rs_name_core::model::repository::WordListRepository;

const SAMPLE_PREFIXES: &str = "mor\nel\ntha\nAel\nbran\ncor\ndru\nfen\ngal\nis\n";
const SAMPLE_SUFFIXES: &str = "wyn\nak\ndor\nis\nriel\nthas\nmir\nond\nwen\nus\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load "prefixes.txt" and "suffixes.txt" from the "data" directory,
    // fall back to the built-in lists if they are missing
    let mut repository = match WordListRepository::from_files("./data/prefixes.txt", "./data/suffixes.txt") {
        Ok(repository) => repository,
        Err(e) => {
            log::info!("using built-in word lists ({e})");
            WordListRepository::from_text(SAMPLE_PREFIXES, SAMPLE_SUFFIXES)?
        }
    };
    let sources = repository.sources();
    println!(
        "{} prefixes from {}, {} suffixes from {}",
        repository.prefixes().len(),
        sources.prefixes.as_deref().unwrap_or("nowhere"),
        repository.suffixes().len(),
        sources.suffixes.as_deref().unwrap_or("nowhere")
    );

    // One list can be swapped on its own, a blank list is refused and the old one stays
    if let Err(e) = repository.reload_list(ListKind::Suffixes, "\n  \n") {
        println!("Refused: {e}");
    }
    repository.reload_list(ListKind::Suffixes, SAMPLE_SUFFIXES)?;
    println!(
        "{} suffixes from {}",
        repository.suffixes().len(),
        repository.sources().suffixes.as_deref().unwrap_or("nowhere")
    );

    // Start from the defaults: 4..=8 characters, 35% chance of a middle letter
    let mut config = GeneratorConfig::default();

    // Combined length of prefix + suffix (a middle letter may add one more)
    config.set_length_bounds(4, 9)?;

    // Chance of inserting a middle letter even when nothing forces it
    config.set_middle_letter_chance(0.5)?;

    // Attempts before giving up on finding a valid pair
    config.set_max_attempts(5_000)?;

    // Invalid values are refused and leave the configuration unchanged
    match config.set_length_bounds(8, 4) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Refused: {e}"),
    }
    match config.set_middle_letter_chance(2.0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Refused: {e}"),
    }

    let generator = repository.generator(config)?;

    // Generate 10 names with the thread-local random source
    let mut rng = rand::rng();
    for i in 0..10 {
        println!("Generated name {}: {}", i + 1, generator.generate_name(&mut rng)?);
    }

    // A seeded source gives the same batch every run
    let mut seeded = ChaCha8Rng::seed_from_u64(42);
    println!("Seeded batch: {}", generator.generate_names(5, &mut seeded)?.join(", "));

    // Show how a name is put together
    let composed = generator.compose_name(&mut seeded)?;
    match composed.connector {
        Some(c) => println!("{} = {} + '{}' + {}", composed, composed.prefix, c, composed.suffix),
        None => println!("{} = {} + {}", composed, composed.prefix, composed.suffix),
    }

    Ok(())
}
