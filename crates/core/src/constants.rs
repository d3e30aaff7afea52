/// Default minimum price increment
pub const DEFAULT_TICK_SIZE: f64 = 0.01;

/// Default contract multiplier
pub const DEFAULT_PRICE_MULTIPLIER: f64 = 1.0;

/// Default divisor for prices quoted in a currency sub-unit
pub const DEFAULT_PRICE_MAGNIFIER: f64 = 1.0;

/// Revision of the positional serialized layout, stored ahead of every
/// serialized asset and checked on load
pub const POSITIONAL_FORM_VERSION: u8 = 1;

/// CME futures month codes, January through December
pub const CME_MONTH_CODES: [(char, u32); 12] = [
    ('F', 1),
    ('G', 2),
    ('H', 3),
    ('J', 4),
    ('K', 5),
    ('M', 6),
    ('N', 7),
    ('Q', 8),
    ('U', 9),
    ('V', 10),
    ('X', 11),
    ('Z', 12),
];
