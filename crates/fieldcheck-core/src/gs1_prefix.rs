//! GS1 company-prefix table: maps the first three digits of a barcode to the
//! country or organization that issued it.
//!
//! The table is a sorted slice of disjoint closed ranges. Lookup is a binary
//! search, so [`country_for_prefix`] costs `O(log n)` for the ~120 entries.
//! Labels are kept in Portuguese, as they are shown to end users.
use std::cmp::Ordering;

use serde::Serialize;

/// One closed interval `[low, high]` of three-digit GS1 prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrefixRange {
    /// First prefix in the range (inclusive).
    pub low: u16,
    /// Last prefix in the range (inclusive).
    pub high: u16,
    /// Country or issuer label.
    pub label: &'static str,
}

impl PrefixRange {
    const fn new(low: u16, high: u16, label: &'static str) -> Self {
        Self { low, high, label }
    }

    /// Returns `true` if `prefix` lies inside this range.
    pub fn contains(&self, prefix: u16) -> bool {
        self.low <= prefix && prefix <= self.high
    }

    fn cmp_prefix(&self, prefix: u16) -> Ordering {
        if self.high < prefix {
            Ordering::Less
        } else if self.low > prefix {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Sorted by `low`; ranges never overlap.
static PREFIX_RANGES: &[PrefixRange] = &[
    PrefixRange::new(2, 19, "E.U.A."),
    PrefixRange::new(20, 29, "Distribuição restringida definido pela organização membro GS1"),
    PrefixRange::new(30, 39, "E.U.A (reservado para medicamentos)"),
    PrefixRange::new(40, 49, "Distribuição restringida definido pela organização membro GS1"),
    PrefixRange::new(50, 59, "Coupons"),
    PrefixRange::new(60, 139, "E.U.A."),
    PrefixRange::new(200, 299, "Distribuição restringida definido pela organização membro GS1"),
    PrefixRange::new(300, 379, "França"),
    PrefixRange::new(380, 380, "Bulgária"),
    PrefixRange::new(383, 383, "Eslovénia"),
    PrefixRange::new(385, 385, "Croácia"),
    PrefixRange::new(387, 387, "Bósnia e Herzegovina"),
    PrefixRange::new(400, 440, "Alemanha"),
    PrefixRange::new(450, 459, "Japão"),
    PrefixRange::new(460, 469, "Rússia"),
    PrefixRange::new(470, 470, "Quirguistão"),
    PrefixRange::new(471, 471, "Ilha de Taiwan"),
    PrefixRange::new(474, 474, "Estônia"),
    PrefixRange::new(475, 475, "Letônia"),
    PrefixRange::new(476, 476, "Azerbaijão"),
    PrefixRange::new(477, 477, "Lituânia"),
    PrefixRange::new(478, 478, "Usbequistão"),
    PrefixRange::new(479, 479, "Sri Lanka"),
    PrefixRange::new(480, 480, "Filipinas"),
    PrefixRange::new(481, 481, "Bielorrússia"),
    PrefixRange::new(482, 482, "Ucrânia"),
    PrefixRange::new(484, 484, "Moldávia"),
    PrefixRange::new(485, 485, "Armênia"),
    PrefixRange::new(486, 486, "Geórgia"),
    PrefixRange::new(487, 487, "Cazaquistão"),
    PrefixRange::new(489, 489, "Hong Kong"),
    PrefixRange::new(490, 499, "Japão"),
    PrefixRange::new(500, 509, "Reino Unido"),
    PrefixRange::new(520, 521, "Grécia"),
    PrefixRange::new(528, 528, "Líbano"),
    PrefixRange::new(529, 529, "Chipre"),
    PrefixRange::new(530, 530, "Albânia"),
    PrefixRange::new(531, 531, "República da Macedônia"),
    PrefixRange::new(535, 535, "Malta"),
    PrefixRange::new(539, 539, "República da Irlanda"),
    PrefixRange::new(540, 549, "Bélgica & Luxemburgo"),
    PrefixRange::new(560, 560, "Portugal"),
    PrefixRange::new(569, 569, "Islândia"),
    PrefixRange::new(570, 579, "Dinamarca"),
    PrefixRange::new(590, 590, "Polónia"),
    PrefixRange::new(594, 594, "Romênia"),
    PrefixRange::new(599, 599, "Hungria"),
    PrefixRange::new(600, 601, "África do Sul"),
    PrefixRange::new(603, 603, "Gana"),
    PrefixRange::new(608, 608, "Bahrein"),
    PrefixRange::new(609, 609, "Ilhas Maurício"),
    PrefixRange::new(611, 611, "Marrocos"),
    PrefixRange::new(613, 613, "Argélia"),
    PrefixRange::new(616, 616, "Quênia"),
    PrefixRange::new(618, 618, "Costa do Marfim"),
    PrefixRange::new(619, 619, "Tunísia"),
    PrefixRange::new(621, 621, "Síria"),
    PrefixRange::new(622, 622, "Egito"),
    PrefixRange::new(624, 624, "Líbia"),
    PrefixRange::new(625, 625, "Jordânia"),
    PrefixRange::new(626, 626, "Irã"),
    PrefixRange::new(627, 627, "Kuwait"),
    PrefixRange::new(628, 628, "Arábia Saudita"),
    PrefixRange::new(629, 629, "Emirados Árabes Unidos"),
    PrefixRange::new(640, 649, "Finlândia"),
    PrefixRange::new(690, 699, "República Popular da China"),
    PrefixRange::new(700, 709, "Noruega"),
    PrefixRange::new(729, 729, "Israel"),
    PrefixRange::new(730, 739, "Suécia"),
    PrefixRange::new(740, 740, "Guatemala"),
    PrefixRange::new(741, 741, "El Salvador"),
    PrefixRange::new(742, 742, "Honduras"),
    PrefixRange::new(743, 743, "Nicarágua"),
    PrefixRange::new(744, 744, "Costa Rica"),
    PrefixRange::new(745, 745, "Panamá"),
    PrefixRange::new(746, 746, "República Dominicana"),
    PrefixRange::new(750, 750, "México"),
    PrefixRange::new(754, 755, "Canadá"),
    PrefixRange::new(759, 759, "Venezuela"),
    PrefixRange::new(760, 769, "Suíça"),
    PrefixRange::new(770, 770, "Colômbia"),
    PrefixRange::new(773, 773, "Uruguai"),
    PrefixRange::new(775, 775, "Peru"),
    PrefixRange::new(777, 777, "Bolívia"),
    PrefixRange::new(779, 779, "Argentina"),
    PrefixRange::new(780, 780, "Chile"),
    PrefixRange::new(784, 784, "Paraguai"),
    PrefixRange::new(786, 786, "Equador"),
    PrefixRange::new(789, 790, "Brasil"),
    PrefixRange::new(800, 839, "Itália"),
    PrefixRange::new(840, 849, "Espanha"),
    PrefixRange::new(850, 850, "Cuba"),
    PrefixRange::new(858, 858, "Eslováquia"),
    PrefixRange::new(859, 859, "República Checa"),
    PrefixRange::new(860, 860, "Sérvia e Montenegro"),
    PrefixRange::new(865, 865, "Mongólia"),
    PrefixRange::new(867, 867, "Coreia do Norte"),
    PrefixRange::new(868, 869, "Turquia"),
    PrefixRange::new(870, 879, "Holanda"),
    PrefixRange::new(880, 880, "Coreia do Sul"),
    PrefixRange::new(884, 884, "Cambodja"),
    PrefixRange::new(885, 885, "Tailândia"),
    PrefixRange::new(888, 888, "Singapura"),
    PrefixRange::new(890, 890, "Índia"),
    PrefixRange::new(893, 893, "Vietnam"),
    PrefixRange::new(899, 899, "Indonésia"),
    PrefixRange::new(900, 919, "Áustria"),
    PrefixRange::new(930, 939, "Austrália"),
    PrefixRange::new(940, 949, "Nova Zelândia"),
    PrefixRange::new(950, 950, "GS1 Global Office"),
    PrefixRange::new(955, 955, "Malásia"),
    PrefixRange::new(958, 958, "Macau"),
    PrefixRange::new(977, 977, "Publicações periódicas seriadas (ISSN)"),
    PrefixRange::new(978, 979, "International ISBN Agency"),
    PrefixRange::new(980, 980, "Refund receipts"),
    PrefixRange::new(981, 982, "Coupons e meios de pagamento"),
    PrefixRange::new(990, 999, "Coupons"),
];

/// Returns the full prefix table, sorted by `low`.
pub fn ranges() -> &'static [PrefixRange] {
    PREFIX_RANGES
}

/// Returns the range that contains `prefix`, if any.
pub fn lookup(prefix: u32) -> Option<&'static PrefixRange> {
    let prefix = u16::try_from(prefix).ok()?;
    PREFIX_RANGES
        .binary_search_by(|range| range.cmp_prefix(prefix))
        .ok()
        .and_then(|idx| PREFIX_RANGES.get(idx))
}

/// Returns the issuer label for a three-digit GS1 prefix.
///
/// `None` when no range covers `prefix` (for example 0, 1, 140-199 or
/// anything above 999).
///
/// # Examples
///
/// ```
/// use fieldcheck_core::gs1_prefix::country_for_prefix;
///
/// assert_eq!(country_for_prefix(789), Some("Brasil"));
/// assert_eq!(country_for_prefix(1), None);
/// ```
pub fn country_for_prefix(prefix: u32) -> Option<&'static str> {
    lookup(prefix).map(|range| range.label)
}

/// Parses the leading three ASCII digits of `code` as a prefix.
///
/// `None` when `code` is shorter than three bytes or any of the first three
/// is not a digit.
pub fn prefix_of(code: &str) -> Option<u32> {
    let head = code.as_bytes().get(..3)?;
    head.iter().try_fold(0u32, |acc, &byte| {
        byte.is_ascii_digit()
            .then(|| acc * 10 + u32::from(byte - b'0'))
    })
}
