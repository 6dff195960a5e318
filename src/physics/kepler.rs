use crate::constants::{G, TAU};
use crate::units::{Dimension, Quantity, UnitError};

/// Newtonian gravitational constant as a dimensioned quantity (m³ kg⁻¹ s⁻²).
pub const GRAV: Quantity = Quantity::from_si(G, Dimension::GRAVITATION);

/// Orbital period from semi-major axis and total mass, P = 2π √(a³ / G m).
pub fn period_from_semimajor_axis(a: Quantity, m_tot: Quantity) -> Result<Quantity, UnitError> {
    a.expect_dim(Dimension::LENGTH)?;
    m_tot.expect_dim(Dimension::MASS)?;
    Ok((a.powi(3) / (GRAV * m_tot)).sqrt() * TAU)
}

/// Semi-major axis from orbital period and total mass, a = ∛(G m P² / 4π²).
pub fn semimajor_axis_from_period(p: Quantity, m_tot: Quantity) -> Result<Quantity, UnitError> {
    p.expect_dim(Dimension::TIME)?;
    m_tot.expect_dim(Dimension::MASS)?;
    Ok((GRAV * m_tot * p.powi(2) / (TAU * TAU)).cbrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{AU, DAY, SOLAR_MASS, YEAR};
    use approx::assert_relative_eq;

    #[test]
    fn earth_orbit_period() {
        let a = Quantity::new(1.0, AU);
        let m = Quantity::new(1.0, SOLAR_MASS);
        let p = period_from_semimajor_axis(a, m).unwrap();
        assert_relative_eq!(p.value_in(DAY).unwrap(), 365.25, max_relative = 1e-3);
    }

    #[test]
    fn earth_orbit_semimajor_axis() {
        let p = Quantity::new(1.0, YEAR);
        let m = Quantity::new(1.0, SOLAR_MASS);
        let a = semimajor_axis_from_period(p, m).unwrap();
        assert_relative_eq!(a.value_in(AU).unwrap(), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn third_law_round_trip() {
        let m = Quantity::new(2.7, SOLAR_MASS);
        let a = Quantity::new(0.83, AU);
        let p = period_from_semimajor_axis(a, m).unwrap();
        let back = semimajor_axis_from_period(p, m).unwrap();
        assert_relative_eq!(back.value_in(AU).unwrap(), 0.83, max_relative = 1e-12);
    }

    #[test]
    fn dimension_checked_inputs() {
        let m = Quantity::new(1.0, SOLAR_MASS);
        assert!(period_from_semimajor_axis(Quantity::new(1.0, DAY), m).is_err());
        assert!(semimajor_axis_from_period(Quantity::new(1.0, AU), m).is_err());
        assert!(period_from_semimajor_axis(Quantity::new(1.0, AU), Quantity::new(1.0, AU)).is_err());
    }
}
