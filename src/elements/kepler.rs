use crate::constants::{MJD_J2000, SECONDS_PER_DAY, TAU};
use crate::elements::errors::ElementsError;
use crate::physics::kepler::GRAV;
use crate::units::{Angle, Dimension, Quantity, UnitSystem};
use hifitime::Epoch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of element names an orbital-elements variant can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementName {
    Period,
    SemiMajorAxis,
    Eccentricity,
    ArgPericenter,
    Inclination,
    AscendingNode,
    MeanAnomaly,
    PrimaryMass,
    SecondaryMass,
}

impl ElementName {
    /// The conventional short symbol, e.g. `P`, `omega`, `M0`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            ElementName::Period => "P",
            ElementName::SemiMajorAxis => "a",
            ElementName::Eccentricity => "e",
            ElementName::ArgPericenter => "omega",
            ElementName::Inclination => "i",
            ElementName::AscendingNode => "Omega",
            ElementName::MeanAnomaly => "M0",
            ElementName::PrimaryMass => "m1",
            ElementName::SecondaryMass => "m2",
        }
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contract shared by every orbital-elements variant: a fixed, non-empty
/// set of named elements, each readable in the instance's unit system.
pub trait OrbitalElements {
    /// The element names this variant exposes. Must be non-empty; variants
    /// assert this at compile time.
    const NAMES: &'static [ElementName];

    fn units(&self) -> &UnitSystem;

    /// The stored value behind `name`, before unit conversion.
    fn raw_element(&self, name: ElementName) -> Result<Quantity, ElementsError>;

    /// The value behind `name`, re-expressed in this instance's units.
    fn element(&self, name: ElementName) -> Result<Quantity, ElementsError> {
        Ok(self.units().decompose(self.raw_element(name)?))
    }

    fn names(&self) -> &'static [ElementName] {
        Self::NAMES
    }
}

/// The J2000.0 reference epoch on the barycentric dynamical (TDB) axis.
pub fn j2000() -> Epoch {
    Epoch::from_tdb_seconds(0.0)
}

/// An epoch from a bare barycentric Modified Julian Date.
pub fn epoch_from_mjd(mjd: f64) -> Epoch {
    Epoch::from_tdb_seconds((mjd - MJD_J2000) * SECONDS_PER_DAY)
}

/// Keplerian orbital elements of a single orbit: one body's motion about
/// the system barycenter or about a companion.
///
/// Instances are immutable and built through [`KeplerElements::builder`],
/// which validates ranges and applies the documented defaults. Angles
/// `omega` and `Omega` are normalized into [0°, 360°) on construction;
/// `i` and `M0` are stored as given.
#[derive(Debug, Clone)]
pub struct KeplerElements {
    pub(crate) p: Quantity,
    pub(crate) a: Quantity,
    pub(crate) e: f64,
    pub(crate) omega: Angle,
    pub(crate) i: Angle,
    pub(crate) big_omega: Angle,
    pub(crate) m0: Angle,
    pub(crate) t0: Epoch,
    pub(crate) units: UnitSystem,
}

impl KeplerElements {
    pub fn builder() -> KeplerElementsBuilder {
        KeplerElementsBuilder::default()
    }

    // Invariants are the caller's responsibility; wraps omega and Omega.
    pub(crate) fn assemble(
        p: Quantity,
        a: Quantity,
        e: f64,
        omega: Angle,
        i: Angle,
        big_omega: Angle,
        m0: Angle,
        t0: Epoch,
        units: UnitSystem,
    ) -> Self {
        KeplerElements {
            p,
            a,
            e,
            omega: omega.wrapped_360(),
            i,
            big_omega: big_omega.wrapped_360(),
            m0,
            t0,
            units,
        }
    }

    /// Orbital period.
    pub fn period(&self) -> Quantity {
        self.units.decompose(self.p)
    }

    /// Semi-major axis. A dimensionless 1 if the orbit is unscaled.
    pub fn semi_major_axis(&self) -> Quantity {
        self.units.decompose(self.a)
    }

    /// Eccentricity, as a dimensionless quantity.
    pub fn eccentricity(&self) -> Quantity {
        Quantity::dimensionless(self.e)
    }

    /// Argument of pericenter, in [0°, 360°).
    pub fn arg_pericenter(&self) -> Quantity {
        self.units.decompose(self.omega.into())
    }

    /// Inclination.
    pub fn inclination(&self) -> Quantity {
        self.units.decompose(self.i.into())
    }

    /// Longitude of the ascending node, in [0°, 360°).
    pub fn ascending_node(&self) -> Quantity {
        self.units.decompose(self.big_omega.into())
    }

    /// Mean anomaly at the reference epoch.
    pub fn mean_anomaly(&self) -> Quantity {
        self.units.decompose(self.m0.into())
    }

    /// Reference epoch, stored as assigned rather than unit-decomposed.
    pub fn epoch(&self) -> Epoch {
        self.t0
    }

    /// Velocity semi-amplitude, K = 2π a sin i / (P √(1−e²)).
    ///
    /// For an unscaled orbit (`a` defaulted) the result carries dimension
    /// 1/time rather than speed.
    pub fn velocity_semi_amplitude(&self) -> Quantity {
        let k = self.a * (TAU * self.i.sin()) / (self.p * (1.0 - self.e * self.e).sqrt());
        self.units.decompose(k)
    }

    /// Binary mass function, m_f = P K³ / (2π G).
    pub fn mass_function(&self) -> Quantity {
        let k = self.a * (TAU * self.i.sin()) / (self.p * (1.0 - self.e * self.e).sqrt());
        self.units.decompose(self.p * k.powi(3) / (GRAV * TAU))
    }
}

impl OrbitalElements for KeplerElements {
    const NAMES: &'static [ElementName] = &[
        ElementName::Period,
        ElementName::SemiMajorAxis,
        ElementName::Eccentricity,
        ElementName::ArgPericenter,
        ElementName::Inclination,
        ElementName::AscendingNode,
        ElementName::MeanAnomaly,
    ];

    fn units(&self) -> &UnitSystem {
        &self.units
    }

    fn raw_element(&self, name: ElementName) -> Result<Quantity, ElementsError> {
        match name {
            ElementName::Period => Ok(self.p),
            ElementName::SemiMajorAxis => Ok(self.a),
            ElementName::Eccentricity => Ok(Quantity::dimensionless(self.e)),
            ElementName::ArgPericenter => Ok(self.omega.into()),
            ElementName::Inclination => Ok(self.i.into()),
            ElementName::AscendingNode => Ok(self.big_omega.into()),
            ElementName::MeanAnomaly => Ok(self.m0.into()),
            other => Err(ElementsError::NotAnElement(other)),
        }
    }
}

const _: () = assert!(!<KeplerElements as OrbitalElements>::NAMES.is_empty());

/// Equal when all physical fields match; the unit-system choice is a
/// presentation concern and does not participate.
impl PartialEq for KeplerElements {
    fn eq(&self, other: &Self) -> bool {
        self.p == other.p
            && self.a == other.a
            && self.e == other.e
            && self.omega == other.omega
            && self.i == other.i
            && self.big_omega == other.big_omega
            && self.m0 == other.m0
            && self.t0 == other.t0
    }
}

impl fmt::Display for KeplerElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeplerElements [P={:.2}, a={:.2}, e={:.2}, ω={:.2}, i={:.2}, Ω={:.2}]",
            self.period(),
            self.semi_major_axis(),
            self.eccentricity(),
            self.arg_pericenter(),
            self.inclination(),
            self.ascending_node(),
        )
    }
}

/// Named-argument construction for [`KeplerElements`].
///
/// `P`, `omega`, `i` and `Omega` are required; `a`, `e`, `M0`, `t0` and
/// `units` have defaults (unscaled orbit, circular, 0°, J2000, the
/// (AU, day, Msun, degree, km/s) system).
#[derive(Debug, Clone, Default)]
pub struct KeplerElementsBuilder {
    p: Option<Quantity>,
    a: Option<Quantity>,
    e: Option<f64>,
    omega: Option<Angle>,
    i: Option<Angle>,
    big_omega: Option<Angle>,
    m0: Option<Angle>,
    t0: Option<Epoch>,
    units: Option<UnitSystem>,
}

impl KeplerElementsBuilder {
    /// Orbital period (time dimension, required).
    pub fn period(mut self, p: Quantity) -> Self {
        self.p = Some(p);
        self
    }

    /// Semi-major axis (length dimension). If unspecified the orbit is
    /// unscaled and reads back as a dimensionless 1.
    pub fn semi_major_axis(mut self, a: Quantity) -> Self {
        self.a = Some(a);
        self
    }

    /// Eccentricity, 0 ≤ e < 1. Default is circular, e = 0.
    pub fn eccentricity(mut self, e: f64) -> Self {
        self.e = Some(e);
        self
    }

    /// Argument of pericenter (required).
    pub fn arg_pericenter(mut self, omega: Angle) -> Self {
        self.omega = Some(omega);
        self
    }

    /// Inclination, 0° ≤ i ≤ 180° (required).
    pub fn inclination(mut self, i: Angle) -> Self {
        self.i = Some(i);
        self
    }

    /// Longitude of the ascending node (required).
    pub fn ascending_node(mut self, big_omega: Angle) -> Self {
        self.big_omega = Some(big_omega);
        self
    }

    /// Mean anomaly at `t0`. Default is 0°.
    pub fn mean_anomaly(mut self, m0: Angle) -> Self {
        self.m0 = Some(m0);
        self
    }

    /// Reference epoch. Default is J2000.
    pub fn epoch(mut self, t0: Epoch) -> Self {
        self.t0 = Some(t0);
        self
    }

    /// Reference epoch from a bare number, interpreted as barycentric MJD.
    pub fn epoch_mjd(mut self, mjd: f64) -> Self {
        self.t0 = Some(epoch_from_mjd(mjd));
        self
    }

    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    pub fn build(self) -> Result<KeplerElements, ElementsError> {
        let p = self.p.ok_or(ElementsError::MissingElement("P"))?;
        let omega = self.omega.ok_or(ElementsError::MissingElement("omega"))?;
        let i = self.i.ok_or(ElementsError::MissingElement("i"))?;
        let big_omega = self
            .big_omega
            .ok_or(ElementsError::MissingElement("Omega"))?;

        p.expect_dim(Dimension::TIME)?;
        if p.si_value() <= 0.0 {
            return Err(ElementsError::NonPositivePeriod);
        }

        if let Some(a) = self.a {
            a.expect_dim(Dimension::LENGTH)?;
            if a.si_value() <= 0.0 {
                return Err(ElementsError::NonPositiveSemiMajorAxis);
            }
        }

        let e = self.e.unwrap_or(0.0);
        if !(0.0..1.0).contains(&e) {
            return Err(ElementsError::InvalidEccentricity(e));
        }

        let i_deg = i.to_degrees();
        if !(0.0..=180.0).contains(&i_deg) {
            return Err(ElementsError::InvalidInclination(i_deg));
        }

        Ok(KeplerElements::assemble(
            p,
            self.a.unwrap_or(Quantity::dimensionless(1.0)),
            e,
            omega,
            i,
            big_omega,
            self.m0.unwrap_or(Angle::ZERO),
            self.t0.unwrap_or_else(j2000),
            self.units.unwrap_or(UnitSystem::DEFAULT),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::kepler::period_from_semimajor_axis;
    use crate::units::{
        AU, DAY, KILOGRAM, KILOMETER, KM_PER_S, M_PER_S, RADIAN, SECOND, SOLAR_MASS, YEAR,
    };
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn base_builder() -> KeplerElementsBuilder {
        KeplerElements::builder()
            .period(Quantity::new(365.0, DAY))
            .arg_pericenter(Angle::from_degrees(67.0))
            .inclination(Angle::from_degrees(21.0))
            .ascending_node(Angle::from_degrees(33.0))
    }

    #[test]
    fn minimal_construction_with_defaults() {
        let el = base_builder().build().unwrap();

        assert_relative_eq!(el.period().value(), 365.0);
        assert_relative_eq!(el.eccentricity().value(), 0.0);
        assert_relative_eq!(el.mean_anomaly().value(), 0.0);
        assert_eq!(el.epoch(), j2000());

        // Unscaled orbit: a reads back as a dimensionless 1
        let a = el.semi_major_axis();
        assert!(a.is_dimensionless());
        assert_relative_eq!(a.value(), 1.0);
    }

    #[test_case("P"; "missing period")]
    #[test_case("omega"; "missing arg pericenter")]
    #[test_case("i"; "missing inclination")]
    #[test_case("Omega"; "missing ascending node")]
    fn missing_required_element(which: &str) {
        let mut b = KeplerElements::builder();
        if which != "P" {
            b = b.period(Quantity::new(365.0, DAY));
        }
        if which != "omega" {
            b = b.arg_pericenter(Angle::ZERO);
        }
        if which != "i" {
            b = b.inclination(Angle::ZERO);
        }
        if which != "Omega" {
            b = b.ascending_node(Angle::ZERO);
        }
        assert!(matches!(b.build(), Err(ElementsError::MissingElement(name)) if name == which));
    }

    #[test_case(0.0 => true; "circular accepted")]
    #[test_case(0.5 => true; "elliptical accepted")]
    #[test_case(0.999 => true; "near parabolic accepted")]
    #[test_case(1.0 => false; "parabolic rejected")]
    #[test_case(-0.1 => false; "negative rejected")]
    fn eccentricity_bounds(e: f64) -> bool {
        base_builder().eccentricity(e).build().is_ok()
    }

    #[test_case(0.0 => true; "prograde equatorial accepted")]
    #[test_case(90.0 => true; "polar accepted")]
    #[test_case(180.0 => true; "retrograde equatorial accepted")]
    #[test_case(180.1 => false; "past retrograde rejected")]
    #[test_case(-0.1 => false; "negative rejected")]
    fn inclination_bounds(i_deg: f64) -> bool {
        base_builder()
            .inclination(Angle::from_degrees(i_deg))
            .build()
            .is_ok()
    }

    #[test]
    fn inclination_error_reports_the_value() {
        let err = base_builder()
            .inclination(Angle::from_degrees(180.1))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("i=180.100"), "got: {}", err);
    }

    #[test_case(0.0 => false; "zero rejected")]
    #[test_case(-365.0 => false; "negative rejected")]
    #[test_case(365.0 => true; "one year accepted")]
    fn period_must_be_positive(days: f64) -> bool {
        base_builder().period(Quantity::new(days, DAY)).build().is_ok()
    }

    #[test]
    fn semi_major_axis_must_be_positive() {
        let result = base_builder()
            .semi_major_axis(Quantity::new(-1.0, AU))
            .build();
        assert_eq!(result, Err(ElementsError::NonPositiveSemiMajorAxis));
    }

    #[test]
    fn quantities_are_dimension_checked() {
        let result = base_builder().period(Quantity::new(1.0, AU)).build();
        assert!(matches!(result, Err(ElementsError::Unit(_))));

        let result = base_builder()
            .semi_major_axis(Quantity::new(1.0, DAY))
            .build();
        assert!(matches!(result, Err(ElementsError::Unit(_))));
    }

    #[test]
    fn node_angles_wrap_into_a_full_turn() {
        let el = base_builder()
            .arg_pericenter(Angle::from_degrees(370.0))
            .ascending_node(Angle::from_degrees(-10.0))
            .build()
            .unwrap();
        assert_relative_eq!(el.arg_pericenter().value(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(el.ascending_node().value(), 350.0, epsilon = 1e-9);
    }

    #[test]
    fn bare_number_epoch_is_barycentric_mjd() {
        let el = base_builder().epoch_mjd(59_112.1423).build().unwrap();
        assert_eq!(el.epoch(), epoch_from_mjd(59_112.1423));
        assert_relative_eq!(
            el.epoch().to_tdb_seconds(),
            (59_112.1423 - 51_544.5) * 86_400.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn accessors_report_in_the_selected_units() {
        let units = UnitSystem::new(KILOMETER, SECOND, KILOGRAM, RADIAN, M_PER_S);
        let el = base_builder()
            .period(Quantity::new(1.0, DAY))
            .semi_major_axis(Quantity::new(1.0, AU))
            .units(units)
            .build()
            .unwrap();
        assert_relative_eq!(el.period().value(), 86_400.0);
        assert_relative_eq!(el.semi_major_axis().value(), 1.495978707e8, max_relative = 1e-12);
        assert_relative_eq!(el.inclination().value(), 21.0_f64.to_radians());
    }

    #[test]
    fn every_declared_name_is_readable() {
        let el = base_builder().build().unwrap();
        for &name in el.names() {
            assert!(el.element(name).is_ok(), "element {} not readable", name);
        }
        assert_eq!(
            el.element(ElementName::PrimaryMass),
            Err(ElementsError::NotAnElement(ElementName::PrimaryMass))
        );
    }

    #[test]
    fn earth_like_velocity_semi_amplitude() {
        // An edge-on 1 AU, 1 yr orbit moves at Earth's orbital speed.
        let el = KeplerElements::builder()
            .period(Quantity::new(1.0, YEAR))
            .semi_major_axis(Quantity::new(1.0, AU))
            .inclination(Angle::from_degrees(90.0))
            .arg_pericenter(Angle::ZERO)
            .ascending_node(Angle::ZERO)
            .build()
            .unwrap();
        let k = el.velocity_semi_amplitude();
        assert_eq!(k.unit(), KM_PER_S);
        assert_relative_eq!(k.value(), 29.786, max_relative = 1e-3);
    }

    #[test]
    fn mass_function_recovers_the_total_mass() {
        // For an edge-on orbit whose P and a obey the third law, m_f = m_tot.
        let a = Quantity::new(1.0, AU);
        let m = Quantity::new(1.0, SOLAR_MASS);
        let p = period_from_semimajor_axis(a, m).unwrap();
        let el = KeplerElements::builder()
            .period(p)
            .semi_major_axis(a)
            .inclination(Angle::from_degrees(90.0))
            .arg_pericenter(Angle::ZERO)
            .ascending_node(Angle::ZERO)
            .build()
            .unwrap();
        let m_f = el.mass_function();
        assert_eq!(m_f.unit(), SOLAR_MASS);
        assert_relative_eq!(m_f.value(), 1.0, max_relative = 1e-9);
    }

    #[test]
    fn value_equality_ignores_the_unit_system() {
        let si = UnitSystem::new(KILOMETER, SECOND, KILOGRAM, RADIAN, M_PER_S);
        let lhs = base_builder().build().unwrap();
        let rhs = base_builder().units(si).build().unwrap();
        assert_eq!(lhs, rhs);

        let other = base_builder().eccentricity(0.1).build().unwrap();
        assert_ne!(lhs, other);
    }

    #[test]
    fn display_renders_two_decimals() {
        let el = base_builder()
            .semi_major_axis(Quantity::new(1.5, AU))
            .eccentricity(0.5)
            .build()
            .unwrap();
        let text = el.to_string();
        assert!(text.contains("P=365.00 d"), "got: {}", text);
        assert!(text.contains("a=1.50 AU"), "got: {}", text);
        assert!(text.contains("e=0.50"), "got: {}", text);
        assert!(text.contains("ω=67.00 deg"), "got: {}", text);
    }
}
