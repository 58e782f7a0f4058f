// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::catalog::zone::PriorityZone;

/// Severity band of an air quality index reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AirQualityBand {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AirQualityBand {
    pub const ALL: [AirQualityBand; 6] = [
        AirQualityBand::Good,
        AirQualityBand::Moderate,
        AirQualityBand::UnhealthyForSensitiveGroups,
        AirQualityBand::Unhealthy,
        AirQualityBand::VeryUnhealthy,
        AirQualityBand::Hazardous,
    ];

    /// Maps a quality index reading onto its band. Upper bounds are inclusive;
    /// negative readings fall into the lowest band.
    #[inline]
    pub const fn from_index(aqi: i64) -> Self {
        match aqi {
            i64::MIN..=50 => AirQualityBand::Good,
            51..=100 => AirQualityBand::Moderate,
            101..=150 => AirQualityBand::UnhealthyForSensitiveGroups,
            151..=200 => AirQualityBand::Unhealthy,
            201..=300 => AirQualityBand::VeryUnhealthy,
            _ => AirQualityBand::Hazardous,
        }
    }

    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            AirQualityBand::Good => "Good",
            AirQualityBand::Moderate => "Moderate",
            AirQualityBand::UnhealthyForSensitiveGroups => "Unhealthy for sensitive groups",
            AirQualityBand::Unhealthy => "Unhealthy",
            AirQualityBand::VeryUnhealthy => "Very Unhealthy",
            AirQualityBand::Hazardous => "Hazardous",
        }
    }

    #[inline]
    pub const fn zone(self) -> PriorityZone {
        match self {
            AirQualityBand::Good | AirQualityBand::Moderate => PriorityZone::ZoneIV,
            AirQualityBand::UnhealthyForSensitiveGroups | AirQualityBand::Unhealthy => {
                PriorityZone::ZoneIII
            }
            AirQualityBand::VeryUnhealthy => PriorityZone::ZoneII,
            AirQualityBand::Hazardous => PriorityZone::ZoneI,
        }
    }
}

impl std::fmt::Display for AirQualityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
