//! Persisted trainer configuration.

use serde::{Deserialize, Serialize};

use crate::{
    chord::{ChordQuality, CHORD_QUALITIES},
    store::{read_json, write_json, KeyValueStore},
};

// -------------------------------------------------------------------------------------------------

/// Store key of the configuration.
pub const CONFIG_KEY: &str = "config";

// -------------------------------------------------------------------------------------------------

/// User settings for generated training rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerConfig {
    /// Number of chords per round.
    pub num_of_chords: usize,
    /// Qualities chords get sampled from.
    pub allowed_qualities: Vec<ChordQuality>,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            num_of_chords: 10,
            allowed_qualities: CHORD_QUALITIES.to_vec(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Holds the current [`TrainerConfig`] and writes every change back to a [`KeyValueStore`].
#[derive(Debug)]
pub struct ConfigStore<S: KeyValueStore> {
    store: S,
    config: TrainerConfig,
}

impl<S: KeyValueStore> ConfigStore<S> {
    /// Load the config from the given store. Missing or unreadable configs fall back to the
    /// default config.
    pub fn new(store: S) -> Self {
        let config = match read_json::<_, TrainerConfig>(&store, CONFIG_KEY) {
            Ok(Some(config)) => config,
            Ok(None) => TrainerConfig::default(),
            Err(err) => {
                log::warn!("Using default config: {:#}", err);
                TrainerConfig::default()
            }
        };
        Self { store, config }
    }

    /// Current config.
    pub fn get(&self) -> &TrainerConfig {
        &self.config
    }

    /// Replace the config and persist it.
    pub fn set(&mut self, config: TrainerConfig) -> anyhow::Result<()> {
        self.config = config;
        write_json(&mut self.store, CONFIG_KEY, &self.config)
    }

    /// Modify the config in place and persist it.
    pub fn update<F: FnOnce(&mut TrainerConfig)>(
        &mut self,
        updater: F,
    ) -> anyhow::Result<&TrainerConfig> {
        updater(&mut self.config);
        write_json(&mut self.store, CONFIG_KEY, &self.config)?;
        Ok(&self.config)
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// -------------------------------------------------------------------------------------------------
