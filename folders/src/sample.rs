//! Synthetic folder data for fixtures and the sample document.

use crate::folder::Folder;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

pub const DATA_SET_SIZE: usize = 1000;

const ADJECTIVES: &[&str] = &[
    "amazing", "brave", "calm", "clever", "creative", "eager", "fancy", "gentle", "golden",
    "happy", "humble", "lucky", "mighty", "noble", "proud", "quiet", "rapid", "silent", "steady",
    "witty",
];

const NOUNS: &[&str] = &[
    "badger", "comet", "dragon", "falcon", "forge", "glacier", "harbor", "meteor", "moonstar",
    "nebula", "orchid", "panther", "phoenix", "quasar", "raven", "spectre", "tempest", "titan",
    "voyager", "wizard",
];

/// Generates `DATA_SET_SIZE - 1` folders, two thirds of which belong to `org_id`.
pub fn generate_data(org_id: Uuid) -> Vec<Folder> {
    generate_data_with_size(DATA_SET_SIZE, org_id)
}

/// Generates folders for indices `1..size`. Every third index gets a random
/// organisation; all others belong to `org_id`.
pub fn generate_data_with_size(size: usize, org_id: Uuid) -> Vec<Folder> {
    let mut rng = rand::thread_rng();

    (1..size)
        .map(|i| Folder {
            id: Uuid::new_v4(),
            name: codename(&mut rng),
            org_id: if i % 3 == 0 { Uuid::new_v4() } else { org_id },
            deleted: rng.gen_bool(0.5),
        })
        .collect()
}

fn codename<R: Rng>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("nameless");
    let noun = NOUNS.choose(rng).copied().unwrap_or("folder");
    format!("{}-{}", adjective, noun)
}
