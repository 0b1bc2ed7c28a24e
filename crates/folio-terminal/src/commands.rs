//! Informational commands: render parts of the profile.

use folio_types::error::Result;
use folio_types::output::{Block, BlockItem, LineStyle, Link, OutputLine};

use crate::alias::ALIASES;
use crate::interpreter::{Command, CommandKind, CommandOutput, CommandRegistry, Environment};

/// Register all built-in commands into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    for kind in CommandKind::ALL {
        reg.register(kind);
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

/// Order in which informational commands are listed by `help`.
const HELP_LISTING: [CommandKind; 7] = [
    CommandKind::Help,
    CommandKind::Whoami,
    CommandKind::Skills,
    CommandKind::Experience,
    CommandKind::Projects,
    CommandKind::Certs,
    CommandKind::Contact,
];

pub(crate) struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        let listing = HELP_LISTING
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(" | ");
        let aliases = ALIASES
            .iter()
            .map(|(from, to)| format!("{from} -> {to}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines = vec![
            OutputLine::info("Available commands:"),
            OutputLine::plain(listing),
        ];
        for kind in [CommandKind::Copy, CommandKind::Open, CommandKind::Theme] {
            lines.push(OutputLine::muted(kind.handler().usage()));
        }
        lines.push(OutputLine::muted(format!(
            "{} | {} (fast typing)",
            CommandKind::Clear.name(),
            CommandKind::Type.handler().usage()
        )));
        lines.push(OutputLine::muted(format!("Aliases: {aliases}")));
        Ok(CommandOutput::Lines(lines))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

pub(crate) struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Who I am"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let p = env.profile;
        Ok(CommandOutput::Lines(vec![
            OutputLine::ok(p.header.name.as_str()),
            OutputLine::plain(p.header.role.as_str()),
            OutputLine::muted(p.about.as_str()),
        ]))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

pub(crate) struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Skills by area"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut block = Block::new();
        for group in &env.profile.skills {
            block.push(BlockItem::Heading(group.display_name()));
            block.push(BlockItem::Badges(group.items.clone()));
        }
        Ok(CommandOutput::Lines(vec![
            OutputLine::info("Skills:"),
            OutputLine::Block(block),
        ]))
    }
}

// ---------------------------------------------------------------------------
// experience
// ---------------------------------------------------------------------------

pub(crate) struct ExperienceCmd;
impl Command for ExperienceCmd {
    fn name(&self) -> &str {
        "experience"
    }
    fn description(&self) -> &str {
        "Work history"
    }
    fn usage(&self) -> &str {
        "experience"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut block = Block::new();
        for job in &env.profile.experience {
            block.push(BlockItem::Heading(format!(
                "{} @ {} ({})",
                job.role, job.company, job.period
            )));
            block.push(BlockItem::Bullets(job.impact.clone()));
        }
        Ok(CommandOutput::Lines(vec![
            OutputLine::info("Experience:"),
            OutputLine::Block(block),
        ]))
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

pub(crate) struct ProjectsCmd;
impl Command for ProjectsCmd {
    fn name(&self) -> &str {
        "projects"
    }
    fn description(&self) -> &str {
        "Selected projects"
    }
    fn usage(&self) -> &str {
        "projects"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let mut block = Block::new();
        for project in &env.profile.projects {
            block.push(BlockItem::Heading(project.name.clone()));
            block.push(BlockItem::Text {
                text: project.stack.join(", "),
                style: LineStyle::Muted,
            });
            block.push(BlockItem::Text {
                text: project.outcome.clone(),
                style: LineStyle::Plain,
            });
            let mut links = Vec::new();
            if let Some(url) = &project.links.github {
                links.push(Link::new("GitHub", url.as_str()));
            }
            if let Some(url) = &project.links.demo {
                links.push(Link::new("Demo", url.as_str()));
            }
            block.push(BlockItem::Links(links));
            block.push(BlockItem::Spacer);
        }
        Ok(CommandOutput::Lines(vec![
            OutputLine::info("Projects:"),
            OutputLine::Block(block),
        ]))
    }
}

// ---------------------------------------------------------------------------
// certs
// ---------------------------------------------------------------------------

pub(crate) struct CertsCmd;
impl Command for CertsCmd {
    fn name(&self) -> &str {
        "certs"
    }
    fn description(&self) -> &str {
        "Certifications"
    }
    fn usage(&self) -> &str {
        "certs"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let certs = &env.profile.certs;
        if certs.is_empty() {
            return Ok(CommandOutput::Lines(vec![OutputLine::warn(
                "No certifications listed.",
            )]));
        }
        Ok(CommandOutput::Lines(vec![
            OutputLine::info("Certifications:"),
            OutputLine::Block(Block::new().with(BlockItem::Bullets(certs.clone()))),
        ]))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

pub(crate) struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "How to reach me"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let c = &env.profile.contact;
        let links = vec![
            Link::new(c.email.as_str(), format!("mailto:{}", c.email)),
            Link::new("GitHub", c.github.as_str()),
            Link::new("LinkedIn", c.linkedin.as_str()),
        ];
        Ok(CommandOutput::Lines(vec![
            OutputLine::info("Contact:"),
            OutputLine::Block(Block::new().with(BlockItem::Links(links))),
        ]))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

pub(crate) struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeHost;

    fn lines(out: CommandOutput) -> Vec<OutputLine> {
        match out {
            CommandOutput::Lines(l) => l,
            other => panic!("expected Lines, got {other:?}"),
        }
    }

    fn block(line: &OutputLine) -> &Block {
        match line {
            OutputLine::Block(b) => b,
            other => panic!("expected Block, got {other:?}"),
        }
    }

    #[test]
    fn help_lists_commands_and_aliases() {
        let mut host = FakeHost::new();
        let out = lines(HelpCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(out[0], OutputLine::info("Available commands:"));
        assert_eq!(
            out[1].as_text(),
            Some("help | whoami | skills | experience | projects | certs | contact")
        );
        let texts: Vec<_> = out.iter().filter_map(OutputLine::as_text).collect();
        assert!(texts.contains(&"copy email|github|linkedin"));
        assert!(texts.contains(&"open github|linkedin|resume"));
        assert!(texts.contains(&"theme light|dark|matrix"));
        let alias_line = texts.last().unwrap();
        assert!(alias_line.starts_with("Aliases: ls -> help"));
        assert!(alias_line.contains("cat about.txt -> whoami"));
    }

    #[test]
    fn whoami_renders_header() {
        let mut host = FakeHost::new();
        let name = host.profile.header.name.clone();
        let out = lines(WhoamiCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], OutputLine::ok(name));
        assert_eq!(out[2].style(), Some(LineStyle::Muted));
    }

    #[test]
    fn skills_has_heading_and_badges_per_group() {
        let mut host = FakeHost::new();
        let groups = host.profile.skills.len();
        let out = lines(SkillsCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(out[0], OutputLine::info("Skills:"));
        let b = block(&out[1]);
        assert_eq!(b.items.len(), groups * 2);
        assert_eq!(
            b.items[0],
            BlockItem::Heading("Cloud Infrastructure".into())
        );
        assert!(matches!(b.items[1], BlockItem::Badges(_)));
    }

    #[test]
    fn experience_titles_include_company_and_period() {
        let mut host = FakeHost::new();
        let job = host.profile.experience[0].clone();
        let out = lines(ExperienceCmd.execute(&[], &mut host.env()).unwrap());
        let b = block(&out[1]);
        assert_eq!(
            b.items[0],
            BlockItem::Heading(format!("{} @ {} ({})", job.role, job.company, job.period))
        );
        assert_eq!(b.items[1], BlockItem::Bullets(job.impact));
    }

    #[test]
    fn projects_render_links_only_when_present() {
        let mut host = FakeHost::new();
        let out = lines(ProjectsCmd.execute(&[], &mut host.env()).unwrap());
        let b = block(&out[1]);
        let link_groups: Vec<_> = b
            .items
            .iter()
            .filter_map(|i| match i {
                BlockItem::Links(l) => Some(l.len()),
                _ => None,
            })
            .collect();
        // Sample: first project has GitHub + Demo, the rest GitHub only.
        assert_eq!(link_groups, vec![2, 1, 1]);
        assert_eq!(b.items.last(), Some(&BlockItem::Spacer));
    }

    #[test]
    fn certs_empty_warns() {
        let mut host = FakeHost::new();
        host.profile.certs.clear();
        let out = lines(CertsCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(out, vec![OutputLine::warn("No certifications listed.")]);
    }

    #[test]
    fn certs_listed_as_bullets() {
        let mut host = FakeHost::new();
        let certs = host.profile.certs.clone();
        let out = lines(CertsCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(out[0], OutputLine::info("Certifications:"));
        assert_eq!(block(&out[1]).items, vec![BlockItem::Bullets(certs)]);
    }

    #[test]
    fn contact_links_email_with_mailto() {
        let mut host = FakeHost::new();
        let email = host.profile.contact.email.clone();
        let out = lines(ContactCmd.execute(&[], &mut host.env()).unwrap());
        match &block(&out[1]).items[0] {
            BlockItem::Links(links) => {
                assert_eq!(links.len(), 3);
                assert_eq!(links[0].label, email);
                assert_eq!(links[0].href, format!("mailto:{email}"));
            },
            other => panic!("expected Links, got {other:?}"),
        }
    }

    #[test]
    fn clear_signals_clear() {
        let mut host = FakeHost::new();
        let out = ClearCmd.execute(&[], &mut host.env()).unwrap();
        assert_eq!(out, CommandOutput::Clear);
    }

    #[test]
    fn informational_commands_ignore_arguments() {
        let mut host = FakeHost::new();
        let a = lines(WhoamiCmd.execute(&["extra"], &mut host.env()).unwrap());
        let b = lines(WhoamiCmd.execute(&[], &mut host.env()).unwrap());
        assert_eq!(a, b);
    }
}
