//! Binding a catalog monster to a live fight, fresh or resumed from storage.

use super::monsters::{Monster, MonsterCatalog};
use crate::utils::persistence::{PersistKey, PersistenceStore, StoreError};
use log::{info, warn};
use rand::Rng;

/// The monster currently being fought and how much health it has left.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterState {
    pub monster_index: usize,
    pub monster: Monster,
    pub monster_current_health: i32,
}

impl EncounterState {
    pub fn is_monster_alive(&self) -> bool {
        self.monster_current_health > 0
    }
}

pub struct EncounterGenerator<'a> {
    catalog: &'a MonsterCatalog,
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(catalog: &'a MonsterCatalog) -> Self {
        Self { catalog }
    }

    /// Draws a monster uniformly from the catalog at full health and records
    /// it as the active encounter, index first.
    pub fn pick_random_monster<R: Rng, S: PersistenceStore>(
        &self,
        rng: &mut R,
        store: &mut S,
    ) -> Result<EncounterState, StoreError> {
        let (monster_index, monster) = self.catalog.pick(rng);
        let encounter = EncounterState {
            monster_index,
            monster: monster.clone(),
            monster_current_health: monster.max_health,
        };

        store.write_int(PersistKey::MonsterIndex, monster_index as i32)?;
        store.write_int(
            PersistKey::MonsterCurrentHealth,
            encounter.monster_current_health,
        )?;

        info!(
            "random encounter: {} ({} hp)",
            encounter.monster.name, encounter.monster_current_health
        );
        Ok(encounter)
    }

    /// Rebuilds the saved encounter. Both keys must be present and in range,
    /// otherwise there is nothing to resume.
    pub fn resume<S: PersistenceStore>(&self, store: &S) -> Option<EncounterState> {
        let index = store.read_int(PersistKey::MonsterIndex);
        let health = store.read_int(PersistKey::MonsterCurrentHealth);

        let (index, health) = match (index, health) {
            (Some(index), Some(health)) => (index, health),
            (None, None) => return None,
            _ => {
                warn!("ignoring half-written encounter ({:?}, {:?})", index, health);
                return None;
            }
        };

        let Some(monster) = usize::try_from(index)
            .ok()
            .and_then(|i| self.catalog.get(i))
        else {
            warn!("saved monster index {} is outside the catalog", index);
            return None;
        };

        if health <= 0 || health > monster.max_health {
            warn!(
                "saved health {} out of range for {} (max {})",
                health, monster.name, monster.max_health
            );
            return None;
        }

        info!("resuming fight with {} at {} hp", monster.name, health);
        Some(EncounterState {
            monster_index: index as usize,
            monster: monster.clone(),
            monster_current_health: health,
        })
    }

    /// Resumes the saved encounter when there is one, otherwise draws a new
    /// monster. The flag reports whether the encounter was resumed.
    pub fn resume_or_generate<R: Rng, S: PersistenceStore>(
        &self,
        rng: &mut R,
        store: &mut S,
    ) -> Result<(EncounterState, bool), StoreError> {
        match self.resume(store) {
            Some(encounter) => Ok((encounter, true)),
            None => Ok((self.pick_random_monster(rng, store)?, false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_pick_random_monster_writes_both_keys() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);
        let mut store = MemoryStore::new();

        let encounter = generator
            .pick_random_monster(&mut create_test_rng(), &mut store)
            .unwrap();

        assert!(encounter.monster_index < catalog.len());
        assert_eq!(encounter.monster_current_health, encounter.monster.max_health);
        assert_eq!(
            store.read_int(PersistKey::MonsterIndex),
            Some(encounter.monster_index as i32)
        );
        assert_eq!(
            store.read_int(PersistKey::MonsterCurrentHealth),
            Some(encounter.monster.max_health)
        );
    }

    #[test]
    fn test_draw_covers_whole_catalog() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);
        let mut rng = create_test_rng();
        let mut seen = vec![false; catalog.len()];

        for _ in 0..2000 {
            let mut store = MemoryStore::new();
            let encounter = generator.pick_random_monster(&mut rng, &mut store).unwrap();
            seen[encounter.monster_index] = true;
        }

        assert!(seen.iter().all(|s| *s), "every monster should be drawn");
    }

    #[test]
    fn test_resume_uses_saved_values() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);
        let mut store = MemoryStore::new();
        store.write_int(PersistKey::MonsterIndex, 1).unwrap();
        store.write_int(PersistKey::MonsterCurrentHealth, 4).unwrap();

        let encounter = generator.resume(&store).unwrap();
        assert_eq!(encounter.monster_index, 1);
        assert_eq!(encounter.monster.name, "Ent");
        assert_eq!(encounter.monster_current_health, 4);
    }

    #[test]
    fn test_half_written_encounter_is_absent() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);

        let mut only_index = MemoryStore::new();
        only_index.write_int(PersistKey::MonsterIndex, 2).unwrap();
        assert!(generator.resume(&only_index).is_none());

        let mut only_health = MemoryStore::new();
        only_health
            .write_int(PersistKey::MonsterCurrentHealth, 3)
            .unwrap();
        assert!(generator.resume(&only_health).is_none());
    }

    #[test]
    fn test_out_of_range_saved_data_is_absent() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);

        let mut store = MemoryStore::new();
        store
            .write_int(PersistKey::MonsterIndex, catalog.len() as i32)
            .unwrap();
        store.write_int(PersistKey::MonsterCurrentHealth, 1).unwrap();
        assert!(generator.resume(&store).is_none());

        store.write_int(PersistKey::MonsterIndex, -1).unwrap();
        assert!(generator.resume(&store).is_none());

        store.write_int(PersistKey::MonsterIndex, 0).unwrap();
        store.write_int(PersistKey::MonsterCurrentHealth, 0).unwrap();
        assert!(generator.resume(&store).is_none());
    }

    #[test]
    fn test_resume_or_generate_replaces_partial_data() {
        let catalog = MonsterCatalog::standard().unwrap();
        let generator = EncounterGenerator::new(&catalog);
        let mut store = MemoryStore::new();
        store
            .write_int(PersistKey::MonsterCurrentHealth, 2)
            .unwrap();

        let (encounter, resumed) = generator
            .resume_or_generate(&mut create_test_rng(), &mut store)
            .unwrap();

        assert!(!resumed);
        assert_eq!(encounter.monster_current_health, encounter.monster.max_health);
        assert_eq!(
            store.read_int(PersistKey::MonsterIndex),
            Some(encounter.monster_index as i32)
        );
    }
}
