#![allow(dead_code)]

use speedtype_sheet::input::Config;

/// A project entry of the config, `(name, total_hours, [(speedtype, percentage)])`.
pub type ProjectEntry<'a> = (&'a str, f64, &'a [(&'a str, f64)]);

#[must_use]
pub fn make_projects(projects: &[ProjectEntry<'_>]) -> String {
    let projects = projects
        .iter()
        .map(|(name, total_hours, distribution)| {
            let distribution = distribution
                .iter()
                .map(|(speedtype, percentage)| format!("{:?}: {}", speedtype, percentage))
                .collect::<Vec<_>>()
                .join(", ");

            format!(
                "{:?}: {{ \"total_hours\": {}, \"speedtype_percentage_distribution\": {{ {} }} }}",
                name, total_hours, distribution
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{{\n{}\n}}", projects)
}

#[must_use]
pub fn make_schedule(schedule: &[(&str, &str)]) -> String {
    let schedule = schedule
        .iter()
        .map(|(day, project)| format!("{:?}: {:?}", day, project))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{ {} }}", schedule)
}

/// Makes a config with a workday from 8:00 AM to 5:00 PM and lunch from
/// 12:00 PM to 1:00 PM.
#[must_use]
pub fn make_config_json(
    projects: &[ProjectEntry<'_>],
    schedule: &[(&str, &str)],
    weeks: usize,
    paid_time_off: f64,
) -> String {
    format!(
        concat!(
            "{{\n",
            "\"projects\": {},\n",
            "\"work_schedule\": {},\n",
            "\"weeks\": {},\n",
            "\"workday_start\": \"8:00 AM\",\n",
            "\"lunch_start\": \"12:00 PM\",\n",
            "\"lunch_end\": \"1:00 PM\",\n",
            "\"workday_end\": \"5:00 PM\",\n",
            "\"paid_time_off\": {}\n",
            "}}\n"
        ),
        make_projects(projects),
        make_schedule(schedule),
        weeks,
        paid_time_off
    )
}

#[must_use]
pub fn make_config(
    projects: &[ProjectEntry<'_>],
    schedule: &[(&str, &str)],
    weeks: usize,
    paid_time_off: f64,
) -> Config {
    Config::try_from_json(&make_config_json(projects, schedule, weeks, paid_time_off))
        .expect("json should be valid")
        .build()
        .expect("config should be valid")
}

pub const WORK_WEEK: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Assigns the `project` to every day of the week.
#[must_use]
pub fn every_day(project: &str) -> Vec<(&'static str, &str)> {
    WORK_WEEK.iter().map(|day| (*day, project)).collect()
}
