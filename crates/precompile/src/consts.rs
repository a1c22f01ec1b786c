//! Gas schedule, selector and length constants for the
//! [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537) operations.

// Operation selectors (the addresses EIP-2537 assigns) and base gas fees
pub const G1_ADD_SELECTOR: u64 = 0x0b;
pub const G1_ADD_BASE_GAS_FEE: u64 = 375;
pub const G1_MSM_SELECTOR: u64 = 0x0c;
pub const G1_MSM_BASE_GAS_FEE: u64 = 12000;
pub const G2_ADD_SELECTOR: u64 = 0x0d;
pub const G2_ADD_BASE_GAS_FEE: u64 = 600;
pub const G2_MSM_SELECTOR: u64 = 0x0e;
pub const G2_MSM_BASE_GAS_FEE: u64 = 22500;
pub const PAIRING_SELECTOR: u64 = 0x0f;
pub const PAIRING_MULTIPLIER_BASE: u64 = 32600;
pub const PAIRING_OFFSET_BASE: u64 = 37700;
pub const MAP_FP_TO_G1_SELECTOR: u64 = 0x10;
pub const MAP_FP_TO_G1_BASE_GAS_FEE: u64 = 5500;
pub const MAP_FP2_TO_G2_SELECTOR: u64 = 0x11;
pub const MAP_FP2_TO_G2_BASE_GAS_FEE: u64 = 23800;

/// The MSM discount is expressed in thousandths of the per-term cost.
pub const MSM_MULTIPLIER: u64 = 1000;

/// Discount table for G1 MSM, indexed by `k - 1` and clamped at 128 terms.
pub static DISCOUNT_TABLE_G1_MSM: [u16; 128] = [
    1000, 949, 848, 797, 764, 750, 738, 728, 719, 712, 705, 698, 692, 687, 682, 677, 673, 669, 665,
    661, 658, 654, 651, 648, 645, 642, 640, 637, 635, 632, 630, 627, 625, 623, 621, 619, 617, 615,
    613, 611, 609, 608, 606, 604, 603, 601, 599, 598, 596, 595, 593, 592, 591, 589, 588, 586, 585,
    584, 582, 581, 580, 579, 577, 576, 575, 574, 573, 572, 570, 569, 568, 567, 566, 565, 564, 563,
    562, 561, 560, 559, 558, 557, 556, 555, 554, 553, 552, 551, 550, 549, 548, 547, 547, 546, 545,
    544, 543, 542, 541, 540, 540, 539, 538, 537, 536, 536, 535, 534, 533, 532, 532, 531, 530, 529,
    528, 528, 527, 526, 525, 525, 524, 523, 522, 522, 521, 520, 520, 519,
];

/// Discount table for G2 MSM, indexed by `k - 1` and clamped at 128 terms.
pub static DISCOUNT_TABLE_G2_MSM: [u16; 128] = [
    1000, 1000, 923, 884, 855, 832, 812, 796, 782, 770, 759, 749, 740, 732, 724, 717, 711, 704,
    699, 693, 688, 683, 679, 674, 670, 666, 663, 659, 655, 652, 649, 646, 643, 640, 637, 634, 632,
    629, 627, 624, 622, 620, 618, 615, 613, 611, 609, 607, 606, 604, 602, 600, 598, 597, 595, 593,
    592, 590, 589, 587, 586, 584, 583, 582, 580, 579, 578, 576, 575, 574, 573, 571, 570, 569, 568,
    567, 566, 565, 563, 562, 561, 560, 559, 558, 557, 556, 555, 554, 553, 552, 552, 551, 550, 549,
    548, 547, 546, 545, 545, 544, 543, 542, 541, 541, 540, 539, 538, 537, 537, 536, 535, 535, 534,
    533, 532, 532, 531, 530, 530, 529, 528, 528, 527, 526, 526, 525, 524, 524,
];

/// Number of bytes of a serialized base field element.
pub const FP_LENGTH: usize = 48;
/// Number of bytes the EVM uses for a base field element: left-padded to
/// a 32-byte boundary.
pub const PADDED_FP_LENGTH: usize = 64;

/// Number of bytes of a padded G1 point (two padded field elements).
pub const PADDED_G1_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// Number of bytes of a padded `Fp2` element.
pub const PADDED_FP2_LENGTH: usize = 2 * PADDED_FP_LENGTH;

/// Number of bytes of a padded G2 point (two padded `Fp2` elements).
pub const PADDED_G2_LENGTH: usize = 2 * PADDED_FP2_LENGTH;

/// Number of bytes of a multiplication scalar.
pub const SCALAR_LENGTH: usize = 32;

/// Input length of the G1 addition operation.
pub const G1_ADD_INPUT_LENGTH: usize = 2 * PADDED_G1_LENGTH;
/// Input length of one G1 MSM term: a padded point and a scalar.
pub const G1_MSM_INPUT_LENGTH: usize = PADDED_G1_LENGTH + SCALAR_LENGTH;

/// Input length of the G2 addition operation.
pub const G2_ADD_INPUT_LENGTH: usize = 2 * PADDED_G2_LENGTH;
/// Input length of one G2 MSM term.
pub const G2_MSM_INPUT_LENGTH: usize = PADDED_G2_LENGTH + SCALAR_LENGTH;

/// Input length of one pairing term: a padded G1 point and a padded G2
/// point.
pub const PAIRING_INPUT_LENGTH: usize = PADDED_G1_LENGTH + PADDED_G2_LENGTH;
/// Output length of the pairing operation: one 32-byte big-endian word.
pub const PAIRING_OUTPUT_LENGTH: usize = 32;

/// Number of zero bytes each field element is left-padded with.
pub const PADDING_LENGTH: usize = 16;
