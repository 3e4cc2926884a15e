//! Password generation.

use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use zeroize::Zeroize;

use super::{GenerateError, GenerationConfig, charset};

/// Generate a single password using the thread-local RNG.
pub fn generate(config: &GenerationConfig) -> Result<String, GenerateError> {
    generate_with(&mut rand::thread_rng(), config)
}

/// Generate `count` passwords. Stops at the first error.
pub fn generate_batch(config: &GenerationConfig, count: usize) -> Result<Vec<String>, GenerateError> {
    config.validate()?;
    let mut rng = rand::thread_rng();
    (0..count).map(|_| generate_with(&mut rng, config)).collect()
}

/// Generate a single password from an explicit random source.
///
/// Minimums are drawn first (without replacement, per class), the rest is
/// filled from the whole pool (with replacement), then the buffer is shuffled
/// so the required characters can land anywhere.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GenerationConfig,
) -> Result<String, GenerateError> {
    config.validate()?;

    let mut buf: Vec<char> = Vec::new();
    buf.try_reserve_exact(config.length).map_err(|_| {
        GenerateError::InvalidConfig(format!("length {} cannot be allocated", config.length))
    })?;
    let mut pool = charset::build(config.classes);

    if config.min_per_class > 0 {
        for class in config.classes.iter() {
            if config.min_per_class > class.size() {
                buf.zeroize();
                pool.zeroize();
                return Err(GenerateError::InsufficientAlphabet {
                    class,
                    requested: config.min_per_class,
                    available: class.size(),
                });
            }
            let alphabet: Vec<char> = class.alphabet().chars().collect();
            buf.extend(alphabet.choose_multiple(rng, config.min_per_class));
            trace!("drew {} distinct {} characters", config.min_per_class, class);
        }
    }

    let remaining = config.length.saturating_sub(buf.len());
    buf.extend((0..remaining).map(|_| random_char(&pool, rng)));

    buf.shuffle(rng);

    let password: String = buf.iter().collect();
    buf.zeroize();
    pool.zeroize();

    debug!(
        "generated password: length={} classes={} min_per_class={}",
        config.length,
        config.classes.len(),
        config.min_per_class
    );
    Ok(password)
}

// Pool is non-empty: validate() rejects an empty class set.
#[inline]
fn random_char<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> char {
    pool[rng.gen_range(0..pool.len())]
}
