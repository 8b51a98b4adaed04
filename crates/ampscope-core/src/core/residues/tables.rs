use phf::{Map, phf_map};

/// Mass of the water molecule added back for the free termini, in Da.
pub const WATER_MASS: f64 = 18.01528;

/// pKa of the N-terminal amine.
pub const N_TERMINUS_PKA: f64 = 8.6;
/// pKa of the C-terminal carboxyl.
pub const C_TERMINUS_PKA: f64 = 3.6;

// Monoisotopic residue masses (Da), i.e. amino acid minus one water.
static RESIDUE_MASSES: Map<char, f64> = phf_map! {
    'A' => 71.03711, 'C' => 103.00919, 'D' => 115.02694, 'E' => 129.04259, 'F' => 147.06841,
    'G' => 57.02146, 'H' => 137.05891, 'I' => 113.08406, 'K' => 128.09496, 'L' => 113.08406,
    'M' => 131.04049, 'N' => 114.04293, 'P' => 97.05276, 'Q' => 128.05858, 'R' => 156.10111,
    'S' => 87.03203, 'T' => 101.04768, 'V' => 99.06841, 'W' => 186.07931, 'Y' => 163.06333,
};

// Eisenberg consensus hydrophobicity scale.
static EISENBERG_HYDROPHOBICITY: Map<char, f64> = phf_map! {
    'A' => 0.62, 'C' => 0.29, 'D' => -0.90, 'E' => -0.74, 'F' => 1.19,
    'G' => 0.48, 'H' => -0.40, 'I' => 1.38, 'K' => -1.50, 'L' => 1.06,
    'M' => 0.64, 'N' => -0.78, 'P' => 0.12, 'Q' => -0.85, 'R' => -2.53,
    'S' => -0.18, 'T' => -0.05, 'V' => 1.08, 'W' => 0.81, 'Y' => 0.26,
};

// Boman (2003) potential protein-interaction scale, kcal/mol.
static BOMAN_SCALE: Map<char, f64> = phf_map! {
    'L' => -4.92, 'I' => -4.92, 'V' => -4.04, 'M' => -4.02, 'F' => -2.98,
    'W' => -2.33, 'A' => -2.25, 'C' => -1.22, 'G' => -0.94, 'Y' => -0.01,
    'T' => 2.78, 'S' => 3.40, 'H' => 4.66, 'Q' => 5.27, 'K' => 5.71,
    'N' => 6.64, 'E' => 10.42, 'D' => 13.08, 'R' => 14.92, 'P' => 0.0,
};

// Ionizable side-chain pKa values (EMBOSS).
static SIDE_CHAIN_PKA: Map<char, f64> = phf_map! {
    'C' => 8.5, 'D' => 3.9, 'E' => 4.1, 'H' => 6.5, 'K' => 10.8, 'R' => 12.5, 'Y' => 10.1,
};

/// Residue mass of `code`, or 0 for a non-canonical character.
pub fn mass_of(code: char) -> f64 {
    RESIDUE_MASSES.get(&code).copied().unwrap_or(0.0)
}

/// Eisenberg hydrophobicity of `code`, or 0 for a non-canonical character.
pub fn hydrophobicity_of(code: char) -> f64 {
    EISENBERG_HYDROPHOBICITY.get(&code).copied().unwrap_or(0.0)
}

/// Boman scale value of `code`, or 0 for a non-canonical character.
pub fn boman_of(code: char) -> f64 {
    BOMAN_SCALE.get(&code).copied().unwrap_or(0.0)
}

/// Side-chain pKa of `code`; only C, D, E, H, K, R and Y carry one.
pub fn side_chain_pka_of(code: char) -> Option<f64> {
    SIDE_CHAIN_PKA.get(&code).copied()
}

pub fn is_canonical(code: char) -> bool {
    RESIDUE_MASSES.contains_key(&code)
}
