use crate::elements::errors::ElementsError;
use crate::elements::kepler::{
    ElementName, KeplerElements, KeplerElementsBuilder, OrbitalElements,
};
use crate::physics::kepler::{period_from_semimajor_axis, semimajor_axis_from_period};
use crate::units::{Angle, Dimension, Quantity, UnitSystem};
use hifitime::Epoch;
use std::fmt;
use std::ops::Deref;

/// Orbital elements of a binary system: component masses plus the
/// Keplerian elements of the relative orbit.
///
/// Exactly one of the period and the semi-major axis may be omitted at
/// construction; the missing one is derived through Kepler's third law
/// from the total mass. If both are supplied they are trusted as given.
///
/// Derefs to the embedded [`KeplerElements`], so all single-orbit
/// accessors remain available.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoBodyKeplerElements {
    elements: KeplerElements,
    m1: Quantity,
    m2: Quantity,
    m_tot: Quantity,
}

impl TwoBodyKeplerElements {
    pub fn builder() -> TwoBodyKeplerElementsBuilder {
        TwoBodyKeplerElementsBuilder::default()
    }

    /// Mass of the primary.
    pub fn primary_mass(&self) -> Quantity {
        self.units.decompose(self.m1)
    }

    /// Mass of the secondary.
    pub fn secondary_mass(&self) -> Quantity {
        self.units.decompose(self.m2)
    }

    /// Total system mass, m1 + m2.
    pub fn total_mass(&self) -> Quantity {
        self.units.decompose(self.m_tot)
    }

    /// The orbit of one component about the system barycenter, as a fresh
    /// [`KeplerElements`]. `selector` must be `"1"` (primary) or `"2"`
    /// (secondary).
    pub fn get_component(&self, selector: &str) -> Result<KeplerElements, ElementsError> {
        match selector {
            "1" => Ok(self.primary()),
            "2" => Ok(self.secondary()),
            other => Err(ElementsError::InvalidComponent(other.to_string())),
        }
    }

    /// The primary's orbit about the barycenter: semi-major axis scaled by
    /// m2 / m_tot, argument of pericenter unchanged.
    pub fn primary(&self) -> KeplerElements {
        let fraction = (self.m2 / self.m_tot).si_value();
        self.component(fraction, Angle::ZERO)
    }

    /// The secondary's orbit about the barycenter: semi-major axis scaled
    /// by m1 / m_tot, argument of pericenter rotated by 180°.
    pub fn secondary(&self) -> KeplerElements {
        let fraction = (self.m1 / self.m_tot).si_value();
        self.component(fraction, Angle::HALF_TURN)
    }

    fn component(&self, mass_fraction: f64, omega_shift: Angle) -> KeplerElements {
        let el = &self.elements;
        KeplerElements::assemble(
            el.p,
            el.a * mass_fraction,
            el.e,
            el.omega + omega_shift,
            el.i,
            el.big_omega,
            el.m0,
            el.t0,
            el.units,
        )
    }
}

impl Deref for TwoBodyKeplerElements {
    type Target = KeplerElements;

    fn deref(&self) -> &KeplerElements {
        &self.elements
    }
}

impl OrbitalElements for TwoBodyKeplerElements {
    const NAMES: &'static [ElementName] = &[
        ElementName::Period,
        ElementName::SemiMajorAxis,
        ElementName::Eccentricity,
        ElementName::PrimaryMass,
        ElementName::SecondaryMass,
        ElementName::ArgPericenter,
        ElementName::Inclination,
        ElementName::AscendingNode,
        ElementName::MeanAnomaly,
    ];

    fn units(&self) -> &UnitSystem {
        &self.elements.units
    }

    fn raw_element(&self, name: ElementName) -> Result<Quantity, ElementsError> {
        match name {
            ElementName::PrimaryMass => Ok(self.m1),
            ElementName::SecondaryMass => Ok(self.m2),
            other => self.elements.raw_element(other),
        }
    }
}

const _: () = assert!(!<TwoBodyKeplerElements as OrbitalElements>::NAMES.is_empty());

impl fmt::Display for TwoBodyKeplerElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TwoBodyKeplerElements [m1={:.2}, m2={:.2}, P={:.2}, a={:.2}, e={:.2}, ω={:.2}, i={:.2}, Ω={:.2}]",
            self.primary_mass(),
            self.secondary_mass(),
            self.period(),
            self.semi_major_axis(),
            self.eccentricity(),
            self.arg_pericenter(),
            self.inclination(),
            self.ascending_node(),
        )
    }
}

/// Named-argument construction for [`TwoBodyKeplerElements`].
///
/// Both masses are required; of `P` and `a` at least one must be given.
#[derive(Debug, Clone, Default)]
pub struct TwoBodyKeplerElementsBuilder {
    m1: Option<Quantity>,
    m2: Option<Quantity>,
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

impl TwoBodyKeplerElementsBuilder {
    /// Mass of the primary (required).
    pub fn primary_mass(mut self, m1: Quantity) -> Self {
        self.m1 = Some(m1);
        self
    }

    /// Mass of the secondary (required).
    pub fn secondary_mass(mut self, m2: Quantity) -> Self {
        self.m2 = Some(m2);
        self
    }

    /// Orbital period. Derived from `a` and the total mass if omitted.
    pub fn period(mut self, p: Quantity) -> Self {
        self.p = Some(p);
        self
    }

    /// Semi-major axis of the relative orbit. Derived from `P` and the
    /// total mass if omitted.
    pub fn semi_major_axis(mut self, a: Quantity) -> Self {
        self.a = Some(a);
        self
    }

    pub fn eccentricity(mut self, e: f64) -> Self {
        self.e = Some(e);
        self
    }

    pub fn arg_pericenter(mut self, omega: Angle) -> Self {
        self.omega = Some(omega);
        self
    }

    pub fn inclination(mut self, i: Angle) -> Self {
        self.i = Some(i);
        self
    }

    pub fn ascending_node(mut self, big_omega: Angle) -> Self {
        self.big_omega = Some(big_omega);
        self
    }

    pub fn mean_anomaly(mut self, m0: Angle) -> Self {
        self.m0 = Some(m0);
        self
    }

    pub fn epoch(mut self, t0: Epoch) -> Self {
        self.t0 = Some(t0);
        self
    }

    /// Reference epoch from a bare number, interpreted as barycentric MJD.
    pub fn epoch_mjd(mut self, mjd: f64) -> Self {
        self.t0 = Some(crate::elements::kepler::epoch_from_mjd(mjd));
        self
    }

    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = Some(units);
        self
    }

    pub fn build(self) -> Result<TwoBodyKeplerElements, ElementsError> {
        let (m1, m2) = match (self.m1, self.m2) {
            (Some(m1), Some(m2)) => (m1, m2),
            _ => return Err(ElementsError::MissingMasses),
        };
        m1.expect_dim(Dimension::MASS)?;
        m2.expect_dim(Dimension::MASS)?;
        let m_tot = m1 + m2;

        let (p, a) = match (self.p, self.a) {
            (None, None) => return Err(ElementsError::UnderdeterminedOrbit),
            (Some(p), None) => (p, semimajor_axis_from_period(p, m_tot)?),
            (None, Some(a)) => (period_from_semimajor_axis(a, m_tot)?, a),
            // Both given: trusted as-is, no third-law cross-check
            (Some(p), Some(a)) => (p, a),
        };

        let mut inner = KeplerElementsBuilder::default()
            .period(p)
            .semi_major_axis(a)
            .arg_pericenter(self.omega.ok_or(ElementsError::MissingElement("omega"))?)
            .inclination(self.i.ok_or(ElementsError::MissingElement("i"))?)
            .ascending_node(self.big_omega.ok_or(ElementsError::MissingElement("Omega"))?);
        if let Some(e) = self.e {
            inner = inner.eccentricity(e);
        }
        if let Some(m0) = self.m0 {
            inner = inner.mean_anomaly(m0);
        }
        if let Some(t0) = self.t0 {
            inner = inner.epoch(t0);
        }
        if let Some(units) = self.units {
            inner = inner.units(units);
        }

        Ok(TwoBodyKeplerElements {
            elements: inner.build()?,
            m1,
            m2,
            m_tot,
        })
    }
}
