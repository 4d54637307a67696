use std::fmt;

use jobboard_types::{JobRecord, LOCATION};

use crate::presentation::Theme;
use crate::presentation::formatters::{truncate, wrap};

const INDENT: &str = "  ";

// --------------------------------------------------------
// Job Card (one entry in a listing)
// --------------------------------------------------------

pub struct JobCardView<'a> {
    job: &'a JobRecord,
    theme: Theme,
}

impl<'a> JobCardView<'a> {
    pub fn new(job: &'a JobRecord, theme: Theme) -> Self {
        Self { job, theme }
    }
}

impl fmt::Display for JobCardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.job;
        let theme = &self.theme;

        writeln!(f, "{}", theme.title(&truncate(&job.job_title, theme.width)))?;
        writeln!(
            f,
            "{} - {}",
            theme.employer(&truncate(&job.employer_name, theme.width / 2)),
            LOCATION
        )?;
        writeln!(f, "{}", theme.salary(&job.salary_display()))?;

        let tags = job.tags();
        if !tags.is_empty() {
            let chips: Vec<String> = tags.iter().map(|t| theme.tag(t)).collect();
            writeln!(f, "{}", chips.join(" "))?;
        }

        let id = format!("id {}", job.timestamp);
        match job.posted_date() {
            Some(date) => writeln!(f, "{}", theme.muted(&format!("Posted {} | {}", date, id)))?,
            None => writeln!(f, "{}", theme.muted(&id))?,
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Job Detail
// --------------------------------------------------------

pub struct JobDetailView<'a> {
    job: &'a JobRecord,
    theme: Theme,
}

impl<'a> JobDetailView<'a> {
    pub fn new(job: &'a JobRecord, theme: Theme) -> Self {
        Self { job, theme }
    }

    fn section(&self, f: &mut fmt::Formatter<'_>, heading: &str, body: &str) -> fmt::Result {
        if body.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}", self.theme.heading(heading))?;
        let width = self.theme.width.saturating_sub(INDENT.len());
        for line in wrap(body, width) {
            if line.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, "{}{}", INDENT, line)?;
            }
        }
        Ok(())
    }

    fn fact(&self, f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
        if value.is_empty() {
            return Ok(());
        }
        let label = self.theme.muted(&format!("{:<14}", label));
        writeln!(f, "{}{}{}", INDENT, label, value)
    }
}

impl fmt::Display for JobDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.job;
        let theme = &self.theme;
        let salary = job.salary_display();

        writeln!(
            f,
            "{}",
            theme.muted(&format!("Jobs > {}", truncate(&job.job_title, theme.width)))
        )?;
        writeln!(f)?;
        writeln!(f, "{}", theme.title(&job.job_title))?;
        writeln!(f, "{}", theme.employer(&job.employer_name))?;

        let tags = job.tags();
        if !tags.is_empty() {
            let chips: Vec<String> = tags.iter().map(|t| theme.tag(t)).collect();
            writeln!(f, "{}", chips.join(" "))?;
        }

        writeln!(f)?;
        writeln!(f, "Salary: {}", theme.salary(&salary))?;
        if let Some(date) = job.posted_date() {
            writeln!(f, "{}", theme.muted(&format!("Posted: {}", date)))?;
        }

        self.section(f, "Job Description", &job.additional_info)?;
        self.section(f, "Compensation Details", &job.compensation_info)?;
        self.section(f, "Hiring Process", &job.hiring_process)?;
        if !job.contact_slack.is_empty() {
            self.section(f, "Contact Information", &format!("Slack: {}", job.contact_slack))?;
        }

        if !job.job_link.is_empty() {
            writeln!(f)?;
            writeln!(f, "Apply: {}", job.job_link)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", theme.heading("Job Details"))?;
        self.fact(f, "Company", &job.employer_name)?;
        self.fact(f, "Location", LOCATION)?;
        self.fact(f, "Salary Range", &salary)?;
        self.fact(f, "Working Style", &job.working_style)?;
        self.fact(f, "Role Type", &job.role_type)?;
        Ok(())
    }
}

// --------------------------------------------------------
// Not Found
// --------------------------------------------------------

pub struct NotFoundView {
    theme: Theme,
}

impl NotFoundView {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl fmt::Display for NotFoundView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.theme.title("Job Not Found"))?;
        writeln!(
            f,
            "The job you're looking for doesn't exist or has been removed."
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.theme.muted("Back to jobs: jobboard list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_testing::JobBuilder;

    #[test]
    fn test_card_plain_rendering() {
        let job = JobBuilder::new(1556817073)
            .title("Rust Developer")
            .employer("Tidal Labs")
            .salary_range("$90k - $120k")
            .working_style("Remote")
            .role_type("Full-time")
            .build();

        let rendered = JobCardView::new(&job, Theme::plain()).to_string();
        insta::assert_snapshot!(rendered, @r"
        Rust Developer
        Tidal Labs - Victoria, BC
        $90k - $120k
        [Remote] [Full-time]
        Posted May 2, 2019 | id 1556817073
        ");
    }

    #[test]
    fn test_card_without_tags_or_date() {
        let job = JobBuilder::new(0).title("Analyst").employer("Harbour Co").build();

        let rendered = JobCardView::new(&job, Theme::plain()).to_string();
        insta::assert_snapshot!(rendered, @r"
        Analyst
        Harbour Co - Victoria, BC
        Salary not specified
        id 0
        ");
    }

    #[test]
    fn test_detail_sections_only_when_present() {
        let job = JobBuilder::new(1556817073)
            .title("Rust Developer")
            .employer("Tidal Labs")
            .comp("90000", "120000")
            .visa_sponsorship("Yes")
            .hiring_process("Two interviews")
            .link("https://jobs.test/rust")
            .build();

        let rendered = JobDetailView::new(&job, Theme::plain()).to_string();
        insta::assert_snapshot!(rendered, @r"
        Jobs > Rust Developer

        Rust Developer
        Tidal Labs
        [Visa Sponsorship]

        Salary: $90000 - $120000
        Posted: May 2, 2019

        Hiring Process
          Two interviews

        Apply: https://jobs.test/rust

        Job Details
          Company       Tidal Labs
          Location      Victoria, BC
          Salary Range  $90000 - $120000
        ");
    }

    #[test]
    fn test_detail_facts_align_with_color() {
        let theme = Theme {
            color: true,
            width: 80,
        };
        let job = JobBuilder::new(1556817073).employer("Tidal Labs").build();

        let rendered = JobDetailView::new(&job, theme).to_string();
        let expected = format!("  {}Victoria, BC\n", theme.muted("Location      "));
        assert!(rendered.contains(&expected), "misaligned facts:\n{}", rendered);
    }

    #[test]
    fn test_not_found() {
        let rendered = NotFoundView::new(Theme::plain()).to_string();
        assert!(rendered.starts_with("Job Not Found\n"));
        assert!(rendered.contains("doesn't exist or has been removed"));
    }
}
