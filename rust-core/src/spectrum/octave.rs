//! Fractional-octave band edges
//! 
//! Band centers are exact: f_c = 1 kHz · G^n, where G is the octave ratio
//! (2 for base-2, 10^(3/10) for base-10) and n the band index relative to 1 kHz.

/// Standard octave bands, named by their nominal center frequency
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octave {
    Hz31_5,
    Hz63,
    Hz125,
    Hz250,
    Hz500,
    KHz1,
    KHz2,
    KHz4,
    KHz8,
    KHz16,
}

/// Part of an octave band to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OctaveSubdivision {
    Full,
    FirstHalf,
    SecondHalf,
    FirstThird,
    SecondThird,
    ThirdThird,
}

/// Octave ratio convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OctaveBase {
    /// G = 2
    Base2,
    
    /// G = 10^(3/10), as in IEC 61260
    Base10,
}

impl OctaveBase {
    /// Frequency ratio between consecutive octave centers
    pub fn ratio(self) -> f64 {
        match self {
            OctaveBase::Base2 => 2.0,
            OctaveBase::Base10 => 10f64.powf(0.3),
        }
    }
}

impl Octave {
    pub const ALL: [Octave; 10] = [
        Octave::Hz31_5,
        Octave::Hz63,
        Octave::Hz125,
        Octave::Hz250,
        Octave::Hz500,
        Octave::KHz1,
        Octave::KHz2,
        Octave::KHz4,
        Octave::KHz8,
        Octave::KHz16,
    ];
    
    /// Band index relative to the 1 kHz band
    pub fn index(self) -> i32 {
        match self {
            Octave::Hz31_5 => -5,
            Octave::Hz63 => -4,
            Octave::Hz125 => -3,
            Octave::Hz250 => -2,
            Octave::Hz500 => -1,
            Octave::KHz1 => 0,
            Octave::KHz2 => 1,
            Octave::KHz4 => 2,
            Octave::KHz8 => 3,
            Octave::KHz16 => 4,
        }
    }
    
    /// Rounded label frequency in Hz (e.g. 31.5, 63, 125)
    pub fn nominal_frequency(self) -> f64 {
        match self {
            Octave::Hz31_5 => 31.5,
            Octave::Hz63 => 63.0,
            Octave::Hz125 => 125.0,
            Octave::Hz250 => 250.0,
            Octave::Hz500 => 500.0,
            Octave::KHz1 => 1000.0,
            Octave::KHz2 => 2000.0,
            Octave::KHz4 => 4000.0,
            Octave::KHz8 => 8000.0,
            Octave::KHz16 => 16000.0,
        }
    }
    
    /// Exact center frequency in Hz for the given base
    pub fn center_frequency(self, base: OctaveBase) -> f64 {
        1000.0 * base.ratio().powi(self.index())
    }
}

impl OctaveSubdivision {
    /// Band edges as fractions of an octave relative to the center
    fn exponents(self) -> (f64, f64) {
        match self {
            OctaveSubdivision::Full => (-0.5, 0.5),
            OctaveSubdivision::FirstHalf => (-0.5, 0.0),
            OctaveSubdivision::SecondHalf => (0.0, 0.5),
            OctaveSubdivision::FirstThird => (-0.5, -1.0 / 6.0),
            OctaveSubdivision::SecondThird => (-1.0 / 6.0, 1.0 / 6.0),
            OctaveSubdivision::ThirdThird => (1.0 / 6.0, 0.5),
        }
    }
}

/// Compute the [low, high] frequency range of an octave band or sub-band
/// 
/// # Arguments
/// * `octave` - Band, by nominal center
/// * `subdivision` - Whole band, or which half / third of it
/// * `base` - Octave ratio convention
/// 
/// # Returns
/// [low, high] in Hz
pub fn octave_frequency_range(
    octave: Octave,
    subdivision: OctaveSubdivision,
    base: OctaveBase,
) -> [f64; 2] {
    let center = octave.center_frequency(base);
    let ratio = base.ratio();
    let (lo, hi) = subdivision.exponents();
    [center * ratio.powf(lo), center * ratio.powf(hi)]
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn assert_range(actual: [f64; 2], expected: [f64; 2]) {
        assert!((actual[0] - expected[0]).abs() < 1e-3, "low {} vs {}", actual[0], expected[0]);
        assert!((actual[1] - expected[1]).abs() < 1e-3, "high {} vs {}", actual[1], expected[1]);
    }
    
    #[test]
    fn test_full_octave_base_two() {
        let range = octave_frequency_range(Octave::Hz500, OctaveSubdivision::Full, OctaveBase::Base2);
        assert_range(range, [353.553, 707.107]);
    }
    
    #[test]
    fn test_second_third_base_ten() {
        let range = octave_frequency_range(Octave::Hz500, OctaveSubdivision::SecondThird, OctaveBase::Base10);
        assert_range(range, [446.684, 562.341]);
    }
    
    #[test]
    fn test_first_half_base_two() {
        let range = octave_frequency_range(Octave::KHz8, OctaveSubdivision::FirstHalf, OctaveBase::Base2);
        assert_range(range, [5656.854, 8000.0]);
    }
    
    #[test]
    fn test_subdivisions_tile_the_band() {
        for octave in Octave::ALL {
            for base in [OctaveBase::Base2, OctaveBase::Base10] {
                let full = octave_frequency_range(octave, OctaveSubdivision::Full, base);
                let first = octave_frequency_range(octave, OctaveSubdivision::FirstThird, base);
                let second = octave_frequency_range(octave, OctaveSubdivision::SecondThird, base);
                let third = octave_frequency_range(octave, OctaveSubdivision::ThirdThird, base);
                
                assert!((first[0] - full[0]).abs() < 1e-9);
                assert!((first[1] - second[0]).abs() < 1e-9);
                assert!((second[1] - third[0]).abs() < 1e-9);
                assert!((third[1] - full[1]).abs() < 1e-9);
                
                let lower = octave_frequency_range(octave, OctaveSubdivision::FirstHalf, base);
                let upper = octave_frequency_range(octave, OctaveSubdivision::SecondHalf, base);
                assert!((lower[1] - upper[0]).abs() < 1e-9);
            }
        }
    }
    
    #[test]
    fn test_centers_near_nominal() {
        for octave in Octave::ALL {
            let center = octave.center_frequency(OctaveBase::Base10);
            let nominal = octave.nominal_frequency();
            assert!((center - nominal).abs() / nominal < 0.03, "{:?}: {}", octave, center);
        }
    }
}
