//! The Alexandria tram network.
//!
//! Four services run between El Nasr and Ramleh. The blue lines (B1, B2)
//! cover the full route; the yellow lines (Y1, Y2) start at San Stefano and
//! stop short of Ramleh. B1/Y1 and B2/Y2 take different branches between
//! San Stefano and Bulky.

use super::NetworkConfig;

const B1: &[u64] = &[
    316823148, 3909161113, 3880407513, 3909161121, 3909161122, 3909161123, 1886590988, 1886590968,
    4792326286, 8412131579, 316824347, 5969128858, 3950015169, 316829952, 4628330183, 4748562215,
    1885060212, 4002201650, 4748507684, 6095379250, 316824433, 401866306, 10970120024, 6095433434,
    6095471258, 6095433435, 6095519914, 4984424561, 1263172984, 1263173062, 316824788,
];

const B2: &[u64] = &[
    316823148, 3909161113, 3880407513, 3909161121, 3909161122, 3909161123, 1886590988, 4002201610,
    4478874013, 4478874012, 4669952291, 8412131578, 316829952, 4628330183, 4748562215, 1885060212,
    4002201652, 6095358858, 316824433, 401866306, 10970120024, 6095433434, 6095471258, 6095433435,
    6095519914, 4984424561, 1263172984, 1263173062, 316824788,
];

const Y1: &[u64] = &[
    1886590988, 1886590968, 4792326286, 8412131579, 316824347, 5969128858, 3950015169, 316829952,
    4628330183, 4748562215, 1885060212, 4002201650, 4748507684, 6095379250, 316824433, 401866306,
    10970120024, 6095433434, 6095471258, 6095433435, 6095519914, 4984424561, 1263172984,
    1263173062,
];

const Y2: &[u64] = &[
    1886590988, 4002201610, 4478874013, 4478874012, 4669952291, 8412131578, 316829952, 4628330183,
    4748562215, 1885060212, 4002201652, 6095358858, 316824433, 401866306, 10970120024, 6095433434,
    6095471258, 6095433435, 6095519914, 4984424561, 1263172984, 1263173062,
];

const STATIONS: &[(u64, &str)] = &[
    (316823148, "El Nasr Station"),
    (316824347, "Bakus"),
    (316824433, "Sporting El-Kobra Station"),
    (316824788, "Ramleh Station"),
    (316829952, "Bulky Station"),
    (401866306, "Sporting El Soghra"),
    (1263172984, "El Azarita Station"),
    (1263173062, "Ibrahim Mosque Station"),
    (1885060212, "Moustafa Kamel"),
    (1886590968, "Gnaklis Station"),
    (1886590988, "San Stefano"),
    (3880407513, "Sidi Bishr"),
    (3909161113, "El Suyuf Station"),
    (3909161121, "El Saraya"),
    (3909161122, "Luran Station"),
    (3909161123, "Tharwat Station"),
    (3950015169, "El Wezarah"),
    (4002201610, "Qasr El-Safa"),
    (4002201650, "Sidi Gaber El Sheikh"),
    (4002201652, "Sidi Gaber El Mahatta"),
    (4478874012, "Gleem Station"),
    (4478874013, "El-Fonoon El-Gamila"),
    (4628330183, "Roshdy Station"),
    (4669952291, "Saba Basha Station"),
    (4748507684, "Cleopatra El Kobra Station"),
    (4748562215, "Mohamed Mahfouz Station"),
    (4792326286, "Shots Station"),
    (4984424561, "El Shahid Mustafa Zayan Station"),
    (5969128858, "Fleming Station"),
    (6095358858, "Cleopatra Station"),
    (6095379250, "Cleopatra Alsoghra Tram Station"),
    (6095433434, "Camp Chezar"),
    (6095433435, "El Shatby Station"),
    (6095471258, "El Gamaa"),
    (6095519914, "El Shoban El Muslmen Station"),
    (8412131578, "El Hadaya Station"),
    (8412131579, "Safer Station"),
    (10970120024, "Al Ibrahimia Station"),
];

/// Blue-line boarding fare.
pub const BLUE_FARE: u32 = 5;

/// Yellow-line boarding fare.
pub const YELLOW_FARE: u32 = 10;

impl NetworkConfig {
    /// The built-in Alexandria tram network.
    pub fn alexandria() -> Self {
        let config = Self::new()
            .with_line("B1", BLUE_FARE, B1)
            .with_line("B2", BLUE_FARE, B2)
            .with_line("Y1", YELLOW_FARE, Y1)
            .with_line("Y2", YELLOW_FARE, Y2);

        STATIONS
            .iter()
            .fold(config, |config, (id, name)| config.with_station(*id, name))
    }
}
