use std::fmt;

/// Kind of corrective measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ventilation,
    RadiantTemperature,
    AirTemperature,
    Cooling,
    Insulation,
    Heating,
    Activity,
    Humidity,
    Maintenance,
    Administrative,
}

impl Category {
    /// Stable tag used when recommendations are stored alongside measurements.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ventilation => "ventilacion",
            Self::RadiantTemperature => "temperatura_radiante",
            Self::AirTemperature => "temperatura",
            Self::Cooling => "enfriamiento",
            Self::Insulation => "aislamiento",
            Self::Heating => "calefaccion",
            Self::Activity => "actividad",
            Self::Humidity => "humedad",
            Self::Maintenance => "mantenimiento",
            Self::Administrative => "administrativa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Urgency of a recommendation, 1 being the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Direct adjustment of a measured parameter.
    First,
    /// Main strategy for the detected stress.
    Second,
    /// Ongoing management measures.
    Third,
}

impl Priority {
    /// Numeric level, 1 to 3.
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

/// A corrective measure derived from an assessment.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub category: Category,
    pub message: String,
    pub actions: Vec<String>,
    pub priority: Option<Priority>,
    /// Suggested time frame, e.g. `"3 months"`.
    pub deadline: Option<String>,
}

impl Recommendation {
    pub(super) fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            actions: Vec::new(),
            priority: None,
            deadline: None,
        }
    }

    pub(super) fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    pub(super) fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(super) fn deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }
}
