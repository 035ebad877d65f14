//! Machine configuration and the encode request/response contract.
//!
//! Loosely-typed settings (rotor names, position letters, plugboard maps)
//! are validated once into a [`MachineConfig`]. After that the machine only
//! ever sees checked wiring tables, offsets and plug leads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alphabet::{self, ALPHABET_SIZE};
use crate::error::RotorCryptError;
use crate::machine::RotorMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{MachineState, RotorName, RotorWiringTable, NUM_ROTORS};

/// Ring settings for the three rotors, slot 0 first, each in `0..26`.
///
/// Ring settings are parsed, validated and carried with the configuration,
/// but the signal path does not apply them: rotor offsets alone determine
/// the substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingSettings([u8; NUM_ROTORS]);

impl RingSettings {
    /// Parses ring settings.
    ///
    /// Accepted forms:
    /// - empty: all rings at `A`
    /// - three letters, e.g. `"AAB"`
    /// - comma-separated numbers `1..=26`, e.g. `"1,1,2"`
    /// - three digits `1..=9`, e.g. `"112"`
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidRingSetting`] for anything else.
    pub fn parse(settings: &str) -> Result<Self, RotorCryptError> {
        let trimmed = settings.trim();
        let invalid = || RotorCryptError::InvalidRingSetting(settings.to_string());

        if trimmed.is_empty() {
            return Ok(RingSettings::default());
        }

        let values: Vec<u8> = if trimmed.contains(',') {
            trimmed
                .split(',')
                .map(|n| match n.trim().parse::<u8>() {
                    Ok(v) if (1..=ALPHABET_SIZE as u8).contains(&v) => Ok(v - 1),
                    _ => Err(invalid()),
                })
                .collect::<Result<Vec<u8>, _>>()?
        } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
            trimmed
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if d >= 1 => Ok((d - 1) as u8),
                    _ => Err(invalid()),
                })
                .collect::<Result<Vec<u8>, _>>()?
        } else {
            trimmed
                .chars()
                .map(|c| alphabet::normalize(c).map(|i| i as u8).ok_or_else(invalid))
                .collect::<Result<Vec<u8>, _>>()?
        };

        let rings: [u8; NUM_ROTORS] = values.try_into().map_err(|_| invalid())?;
        Ok(RingSettings(rings))
    }

    pub fn values(&self) -> [u8; NUM_ROTORS] {
        self.0
    }
}

/// Validated machine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    pub rotor_wirings: [RotorWiringTable; NUM_ROTORS],
    pub initial_positions: MachineState,
    pub ring_settings: RingSettings,
    pub plugboard: Plugboard,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotor_wirings: RotorName::DEFAULT_ORDER.map(RotorName::wiring),
            initial_positions: MachineState::default(),
            ring_settings: RingSettings::default(),
            plugboard: Plugboard::new(),
        }
    }
}

impl MachineConfig {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::Json`] for malformed JSON, or the
    /// validation error of the first invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"rotors": ["I", "II", "III"], "positions": "AAZ", "plugboard": ["SZ", "GT"]}"#,
    /// ).unwrap();
    /// assert_eq!(config.initial_positions.offsets(), [0, 0, 25]);
    /// assert_eq!(config.plugboard.swap('G'), 'T');
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RotorCryptError> {
        let raw: RawMachineConfig = serde_json::from_str(json)?;
        MachineConfig::try_from(raw)
    }

    /// Assembles the machine described by this configuration.
    pub fn build(&self) -> RotorMachine {
        RotorMachine::new(self.rotor_wirings, Reflector::default()).with_plugboard(self.plugboard)
    }
}

/// Configuration as it arrives from an external source, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMachineConfig {
    /// Rotor names, slot 0 first. Defaults to `["I", "II", "III"]`.
    #[serde(default)]
    pub rotors: Option<Vec<String>>,
    /// Explicit 26-letter wirings, slot 0 first. Overrides `rotors`.
    #[serde(default)]
    pub wirings: Option<Vec<String>>,
    /// One letter per rotor, slot 0 first. Defaults to `"AAA"`.
    #[serde(default)]
    pub positions: Option<String>,
    #[serde(default)]
    pub ring_settings: Option<String>,
    /// Two-letter plug leads, e.g. `["SZ", "GT"]`.
    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl TryFrom<RawMachineConfig> for MachineConfig {
    type Error = RotorCryptError;

    fn try_from(raw: RawMachineConfig) -> Result<Self, Self::Error> {
        let rotor_wirings: [RotorWiringTable; NUM_ROTORS] = if let Some(wirings) = &raw.wirings {
            let tables = wirings
                .iter()
                .map(|w| RotorWiringTable::new(w))
                .collect::<Result<Vec<_>, _>>()?;
            let count = tables.len();
            tables
                .try_into()
                .map_err(|_| RotorCryptError::InvalidRotorSettings(count))?
        } else if let Some(names) = &raw.rotors {
            let tables = names
                .iter()
                .map(|n| n.parse::<RotorName>().map(RotorName::wiring))
                .collect::<Result<Vec<_>, _>>()?;
            let count = tables.len();
            tables
                .try_into()
                .map_err(|_| RotorCryptError::InvalidRotorSettings(count))?
        } else {
            RotorName::DEFAULT_ORDER.map(RotorName::wiring)
        };

        let initial_positions = match &raw.positions {
            Some(letters) => MachineState::from_letters(letters)?,
            None => MachineState::default(),
        };

        let ring_settings = RingSettings::parse(raw.ring_settings.as_deref().unwrap_or(""))?;
        let plugboard = Plugboard::from_leads(&raw.plugboard.join(" "))?;

        log::debug!(
            "Configuration validated: positions {}, rings {:?}, {} plug leads",
            initial_positions,
            ring_settings.values(),
            plugboard.num_leads()
        );

        Ok(MachineConfig {
            rotor_wirings,
            initial_positions,
            ring_settings,
            plugboard,
        })
    }
}

/// Encode request accepted at a service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub text: String,
    /// One letter per rotor, concatenated, slot 0 first.
    pub rotor_settings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_settings: Option<String>,
    /// Letter-to-letter map; `{"A": "B"}` and `{"B": "A"}` name the same lead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugboard: Option<BTreeMap<String, String>>,
}

impl EncodeRequest {
    pub fn from_json(json: &str) -> Result<Self, RotorCryptError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the request into a machine configuration on rotors I, II, III.
    ///
    /// # Errors
    /// Returns the validation error of the first invalid setting.
    pub fn to_config(&self) -> Result<MachineConfig, RotorCryptError> {
        let mut plugboard = Plugboard::new();
        if let Some(map) = &self.plugboard {
            for (from, to) in map {
                plugboard.add_lead(single_letter(from)?, single_letter(to)?)?;
            }
        }

        Ok(MachineConfig {
            rotor_wirings: RotorName::DEFAULT_ORDER.map(RotorName::wiring),
            initial_positions: MachineState::from_letters(&self.rotor_settings)?,
            ring_settings: RingSettings::parse(self.ring_settings.as_deref().unwrap_or(""))?,
            plugboard,
        })
    }
}

fn single_letter(s: &str) -> Result<char, RotorCryptError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(RotorCryptError::MalformedPlugPair(s.to_string())),
    }
}

/// Encode response returned at a service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub result: String,
    /// Final rotor positions as letters, slot 0 first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotor_positions: Option<Vec<String>>,
}

impl EncodeResponse {
    pub fn to_json(&self) -> Result<String, RotorCryptError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serves one encode request. Holds no state between calls.
///
/// # Examples
///
/// ```
/// use rotorcrypt::config::{handle_encode, EncodeRequest};
///
/// let request = EncodeRequest::from_json(r#"{"text": "A", "rotor_settings": "AAA"}"#).unwrap();
/// let response = handle_encode(&request).unwrap();
/// assert_eq!(response.result, "O");
/// assert_eq!(response.rotor_positions.unwrap(), vec!["B", "A", "A"]);
/// ```
pub fn handle_encode(request: &EncodeRequest) -> Result<EncodeResponse, RotorCryptError> {
    let config = request.to_config()?;
    let machine = config.build();
    let (result, state) = machine.encode(&request.text, config.initial_positions);
    let positions = state.to_letters().chars().map(String::from).collect();
    Ok(EncodeResponse {
        result,
        rotor_positions: Some(positions),
    })
}
