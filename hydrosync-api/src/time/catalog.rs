use super::OffsetParseError;

/// One recognized UTC offset with representative locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffsetEntry {
    /// Sign-prefixed "±HH:MM" label.
    pub label: &'static str,
    /// Places currently observing this offset.
    pub example_locations: &'static [&'static str],
}

/// Every selectable UTC offset, sorted ascending. Lookup is by exact
/// minute value, so the table must stay exhaustive over the standard
/// hour offsets plus the inhabited half/quarter-hour zones.
pub const UTC_OFFSET_CATALOG: &[UtcOffsetEntry] = &[
    UtcOffsetEntry {
        label: "-12:00",
        example_locations: &["Baker Island (unpopulated)"],
    },
    UtcOffsetEntry {
        label: "-11:00",
        example_locations: &["Samoa (Standard Time)", "Midway Atoll", "Niue"],
    },
    UtcOffsetEntry {
        label: "-10:00",
        example_locations: &["Hawaii", "Tahiti", "Cook Islands"],
    },
    UtcOffsetEntry {
        label: "-09:30",
        example_locations: &["Marquesas Islands"],
    },
    UtcOffsetEntry {
        label: "-09:00",
        example_locations: &["Alaska (Standard Time)", "Gambier Islands"],
    },
    UtcOffsetEntry {
        label: "-08:00",
        example_locations: &["Pacific Standard Time (e.g., Los Angeles, Vancouver)"],
    },
    UtcOffsetEntry {
        label: "-07:00",
        example_locations: &["Mountain Standard Time (e.g., Denver, Phoenix)"],
    },
    UtcOffsetEntry {
        label: "-06:00",
        example_locations: &["Central Standard Time (e.g., Chicago, Mexico City)", "Costa Rica"],
    },
    UtcOffsetEntry {
        label: "-05:00",
        example_locations: &["Eastern Standard Time (e.g., New York, Toronto)", "Bogota", "Lima"],
    },
    UtcOffsetEntry {
        label: "-04:30",
        example_locations: &["Caracas, Venezuela"],
    },
    UtcOffsetEntry {
        label: "-04:00",
        example_locations: &["Atlantic Standard Time (e.g., Halifax)", "Barbados", "La Paz"],
    },
    UtcOffsetEntry {
        label: "-03:30",
        example_locations: &["Newfoundland, Canada"],
    },
    UtcOffsetEntry {
        label: "-03:00",
        example_locations: &["Buenos Aires", "Sao Paulo", "Greenland (most areas)"],
    },
    UtcOffsetEntry {
        label: "-02:00",
        example_locations: &["South Georgia and the South Sandwich Islands"],
    },
    UtcOffsetEntry {
        label: "-01:00",
        example_locations: &["Cape Verde", "Azores"],
    },
    UtcOffsetEntry {
        label: "+00:00",
        example_locations: &["London (Winter)", "Dublin (Winter)", "Iceland", "Ghana", "Lisbon"],
    },
    UtcOffsetEntry {
        label: "+01:00",
        example_locations: &["Central European Time (e.g., Paris, Berlin)", "West Africa Time"],
    },
    UtcOffsetEntry {
        label: "+02:00",
        example_locations: &["Eastern European Time (e.g., Cairo, Athens)", "South Africa", "Israel"],
    },
    UtcOffsetEntry {
        label: "+03:00",
        example_locations: &["Moscow", "Baghdad", "Kuwait", "Nairobi"],
    },
    UtcOffsetEntry {
        label: "+03:30",
        example_locations: &["Tehran, Iran"],
    },
    UtcOffsetEntry {
        label: "+04:00",
        example_locations: &["Dubai", "Abu Dhabi", "Tbilisi", "Yerevan"],
    },
    UtcOffsetEntry {
        label: "+04:30",
        example_locations: &["Kabul, Afghanistan"],
    },
    UtcOffsetEntry {
        label: "+05:00",
        example_locations: &["Pakistan", "Tashkent", "Maldives"],
    },
    UtcOffsetEntry {
        label: "+05:30",
        example_locations: &["India", "Sri Lanka"],
    },
    UtcOffsetEntry {
        label: "+05:45",
        example_locations: &["Kathmandu, Nepal"],
    },
    UtcOffsetEntry {
        label: "+06:00",
        example_locations: &["Bangladesh", "Almaty", "Yekaterinburg"],
    },
    UtcOffsetEntry {
        label: "+06:30",
        example_locations: &["Myanmar (Burma)", "Cocos Islands"],
    },
    UtcOffsetEntry {
        label: "+07:00",
        example_locations: &["Bangkok", "Hanoi", "Jakarta", "Novosibirsk"],
    },
    UtcOffsetEntry {
        label: "+08:00",
        example_locations: &["China", "Singapore", "Hong Kong", "Perth"],
    },
    UtcOffsetEntry {
        label: "+08:45",
        example_locations: &["Eucla, Australia"],
    },
    UtcOffsetEntry {
        label: "+09:00",
        example_locations: &["Tokyo", "Seoul", "Irkutsk"],
    },
    UtcOffsetEntry {
        label: "+09:30",
        example_locations: &["Adelaide", "Darwin, Australia"],
    },
    UtcOffsetEntry {
        label: "+10:00",
        example_locations: &["Sydney (Winter)", "Brisbane", "Guam", "Vladivostok"],
    },
    UtcOffsetEntry {
        label: "+10:30",
        example_locations: &["Lord Howe Island, Australia"],
    },
    UtcOffsetEntry {
        label: "+11:00",
        example_locations: &["Solomon Islands", "New Caledonia"],
    },
    UtcOffsetEntry {
        label: "+11:30",
        example_locations: &["Norfolk Island"],
    },
    UtcOffsetEntry {
        label: "+12:00",
        example_locations: &["Fiji", "Auckland (Winter)", "Marshall Islands"],
    },
    UtcOffsetEntry {
        label: "+12:45",
        example_locations: &["Chatham Islands, New Zealand"],
    },
    UtcOffsetEntry {
        label: "+13:00",
        example_locations: &["Tonga", "Phoenix Islands"],
    },
    UtcOffsetEntry {
        label: "+14:00",
        example_locations: &["Kiribati (Line Islands)"],
    },
];

/// Parses a sign-prefixed "±HH:MM" label into signed total minutes.
pub fn offset_to_minutes(label: &str) -> Result<i32, OffsetParseError> {
    let sign = match label.as_bytes().first() {
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return Err(OffsetParseError::MissingSign),
    };
    let (hours, minutes) = label[1..]
        .split_once(':')
        .ok_or(OffsetParseError::BadComponent)?;
    let hours: i32 = hours.parse().map_err(|_| OffsetParseError::BadComponent)?;
    let minutes: i32 = minutes.parse().map_err(|_| OffsetParseError::BadComponent)?;

    Ok(sign * (hours * 60 + minutes))
}

/// Position of the first catalog row matching the given offset.
///
/// Both the host-offset lookup and backend-reported offsets resolve
/// through this, so a confirmed offset always lands on the same row.
pub fn catalog_index(offset_minutes: i32) -> Option<usize> {
    UTC_OFFSET_CATALOG
        .iter()
        .position(|entry| offset_to_minutes(entry.label) == Ok(offset_minutes))
}

/// Signed minutes of the catalog row at `index`.
pub fn catalog_minutes(index: usize) -> Option<i32> {
    UTC_OFFSET_CATALOG
        .get(index)
        .and_then(|entry| offset_to_minutes(entry.label).ok())
}
