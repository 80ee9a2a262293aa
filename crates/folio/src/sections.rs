//! Section panel contents.

use folio_config::ContactInfo;
use folio_core::{
    BlogPost, ExperienceEntry, Portfolio, ProjectEntry, Section, SkillEntry, group_skills,
};
use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
};

use crate::contact::{ContactForm, Field, FormState};

/// Body text.
const TEXT: Color = Color::Rgb(229, 231, 235);
/// Secondary text.
const MUTED: Color = Color::Rgb(148, 148, 160);
/// Validation and send errors.
const ERROR: Color = Color::Rgb(248, 113, 113);

/// Width of a skill proficiency bar in cells.
const BAR_WIDTH: usize = 20;

/// Heading color of each section.
pub fn accent(section: Section) -> Color {
    match section {
        Section::Blog => Color::Rgb(236, 72, 153),
        Section::Experience => Color::Rgb(74, 222, 128),
        Section::Projects => Color::Rgb(167, 139, 250),
        Section::Skills => Color::Rgb(34, 211, 238),
        Section::Contact => Color::Rgb(96, 165, 250),
    }
}

/// One-line introduction under the section heading.
fn intro(section: Section) -> &'static str {
    match section {
        Section::Blog => "Thoughts, tutorials and notes from recent work.",
        Section::Experience => "Where I have worked and what I did there.",
        Section::Projects => "Things I have built.",
        Section::Skills => "Tools and technologies I work with.",
        Section::Contact => "Have a project in mind or just want to say hi? Send a message.",
    }
}

/// Lines for the panel of `section`.
pub fn section_lines(
    section: Section,
    portfolio: &Portfolio,
    form: &ContactForm,
    info: &ContactInfo,
) -> Vec<Line<'static>> {
    let color = accent(section);
    let mut lines = vec![
        Line::from(intro(section)).fg(MUTED),
        Line::default(),
    ];
    lines.extend(match section {
        Section::Blog => blog_lines(&portfolio.posts, color),
        Section::Experience => experience_lines(&portfolio.experiences, color),
        Section::Projects => project_lines(&portfolio.projects, color),
        Section::Skills => skill_lines(&portfolio.skills, color),
        Section::Contact => {
            let mut lines = info_lines(info, color);
            lines.extend(contact_lines(form, color));
            lines
        }
    });
    lines
}

fn empty_state(title: &'static str, hint: &'static str) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(title).fg(MUTED).centered(),
        Line::from(hint).fg(Color::DarkGray).centered(),
    ]
}

fn blog_lines(posts: &[BlogPost], color: Color) -> Vec<Line<'static>> {
    if posts.is_empty() {
        return empty_state(
            "No posts yet",
            "Blog articles will appear here once published",
        );
    }

    let mut lines = Vec::new();
    for post in posts {
        lines.push(Line::from(post.title.clone()).fg(color).bold());
        lines.push(Line::from(vec![
            Span::styled(
                post.created_at.format("%B %-d, %Y").to_string(),
                Style::new().fg(MUTED),
            ),
            Span::styled(
                format!("  /blog/{}", post.slug),
                Style::new().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(post.summary()).fg(TEXT));
        lines.push(Line::default());
    }
    lines
}

fn experience_lines(entries: &[ExperienceEntry], color: Color) -> Vec<Line<'static>> {
    if entries.is_empty() {
        return empty_state(
            "No experience entries yet",
            "Experience timeline will appear here once added",
        );
    }

    let mut lines = Vec::new();
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::new().fg(color)),
            Span::styled(entry.period(), Style::new().fg(MUTED)),
        ]));
        lines.push(Line::from(format!("  {}", entry.position)).fg(TEXT).bold());
        lines.push(Line::from(format!("  {}", entry.company)).fg(color));

        let description = entry.parsed_description();
        for paragraph in description.text.lines() {
            lines.push(Line::from(format!("  {paragraph}")).fg(TEXT));
        }
        for bullet in description.bullets {
            lines.push(Line::from(vec![
                Span::styled("    › ", Style::new().fg(color)),
                Span::styled(bullet, Style::new().fg(TEXT)),
            ]));
        }
        lines.push(Line::default());
    }
    lines
}

fn project_lines(projects: &[ProjectEntry], color: Color) -> Vec<Line<'static>> {
    if projects.is_empty() {
        return empty_state("No projects yet", "Projects will appear here once added");
    }

    let mut lines = Vec::new();
    for project in projects {
        lines.push(Line::from(project.title.clone()).fg(color).bold());
        lines.push(Line::from(project.description.clone()).fg(TEXT));

        let chips: Vec<Span> = project
            .tech()
            .into_iter()
            .flat_map(|tech| {
                [
                    Span::styled(
                        format!(" {tech} "),
                        Style::new().fg(Color::Black).bg(color),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        if !chips.is_empty() {
            lines.push(Line::from(chips));
        }

        let links = [
            ("demo", &project.demo_url),
            ("live", &project.live_url),
            ("code", &project.repo_url),
        ];
        for (label, url) in links {
            if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{label:>5} "), Style::new().fg(MUTED)),
                    Span::styled(
                        url.to_string(),
                        Style::new().fg(color).add_modifier(Modifier::UNDERLINED),
                    ),
                ]));
            }
        }
        lines.push(Line::default());
    }
    lines
}

/// Filled cells of a proficiency bar for a `percent` value.
fn filled_cells(percent: f32) -> usize {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    (ratio * BAR_WIDTH as f32).round() as usize
}

fn skill_line(skill: &SkillEntry, color: Color, name_width: usize) -> Line<'static> {
    let filled = filled_cells(skill.proficiency);
    Line::from(vec![
        Span::styled(
            format!("  {:<name_width$} ", skill.name),
            Style::new().fg(TEXT),
        ),
        Span::styled("█".repeat(filled), Style::new().fg(color)),
        Span::styled(
            "░".repeat(BAR_WIDTH - filled),
            Style::new().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {:>3}%", skill.proficiency.round() as i32),
            Style::new().fg(MUTED),
        ),
    ])
}

fn skill_lines(skills: &[SkillEntry], color: Color) -> Vec<Line<'static>> {
    if skills.is_empty() {
        return empty_state("No skills yet", "Skills will appear here once added");
    }

    let name_width = skills
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);
    let mut lines = Vec::new();
    for (category, members) in group_skills(skills) {
        lines.push(Line::from(category.to_string()).fg(color).bold());
        for skill in members {
            lines.push(skill_line(skill, color, name_width));
        }
        lines.push(Line::default());
    }
    lines
}

/// Email, phone, location and profile links listed above the form.
fn info_lines(info: &ContactInfo, color: Color) -> Vec<Line<'static>> {
    if info.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let details = [
        ("✉", &info.email),
        ("☎", &info.phone),
        ("⌖", &info.location),
    ];
    for (icon, value) in details {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("  {icon} "), Style::new().fg(color)),
                Span::styled(value.clone(), Style::new().fg(TEXT)),
            ]));
        }
    }
    for link in &info.links {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", link.label), Style::new().fg(MUTED)),
            Span::styled(
                link.url.clone(),
                Style::new().fg(color).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::default());
    lines
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "you@example.com",
        Field::Message => "What would you like to talk about?",
    }
}

fn contact_lines(form: &ContactForm, color: Color) -> Vec<Line<'static>> {
    if form.state() == FormState::Sent {
        return vec![
            Line::default(),
            Line::from("✉").fg(color).centered(),
            Line::from("Message Sent!").fg(TEXT).bold().centered(),
            Line::from("Thanks for reaching out. I'll get back to you soon.")
                .fg(MUTED)
                .centered(),
            Line::default(),
            Line::from(vec![
                Span::styled("Enter", Style::new().fg(color).bold()),
                Span::styled(" send another message", Style::new().fg(MUTED)),
            ])
            .centered(),
        ];
    }

    let editing = form.state() == FormState::Editing;
    let mut lines = Vec::new();
    for field in [Field::Name, Field::Email, Field::Message] {
        let focused = form.focus() == field;
        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            Style::new().fg(color).bold()
        } else {
            Style::new().fg(MUTED)
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));

        let value = form.value(field);
        let mut spans = vec![Span::raw("  ")];
        if value.is_empty() {
            spans.push(Span::styled(
                placeholder(field),
                Style::new().fg(Color::DarkGray).italic(),
            ));
        } else {
            spans.push(Span::styled(value.to_string(), Style::new().fg(TEXT)));
        }
        if focused && editing {
            spans.push(Span::styled("▏", Style::new().fg(color)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let button = if editing {
        Span::styled(
            " Send Message ",
            Style::new().fg(Color::Black).bg(color).bold(),
        )
    } else {
        Span::styled(" Sending... ", Style::new().fg(MUTED).bg(Color::DarkGray))
    };
    lines.push(Line::from(vec![Span::raw("  "), button]));

    if let Some(error) = form.error() {
        lines.push(Line::default());
        lines.push(Line::from(format!("  {error}")).fg(ERROR));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::SocialLink;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn contact_text(form: &ContactForm, info: &ContactInfo) -> String {
        text(&section_lines(
            Section::Contact,
            &Portfolio::default(),
            form,
            info,
        ))
    }

    fn skill(name: &str, category: &str, proficiency: f32) -> SkillEntry {
        SkillEntry {
            id: name.to_lowercase(),
            name: name.into(),
            category: category.into(),
            icon: None,
            proficiency,
        }
    }

    #[test]
    fn test_empty_sections_show_placeholders() {
        let portfolio = Portfolio::default();
        let form = ContactForm::new();
        let info = ContactInfo::default();
        let blog = text(&section_lines(Section::Blog, &portfolio, &form, &info));
        assert!(blog.contains("Blog articles will appear here once published"));
        let skills = text(&section_lines(Section::Skills, &portfolio, &form, &info));
        assert!(skills.contains("Skills will appear here once added"));
        let experience = text(&section_lines(Section::Experience, &portfolio, &form, &info));
        assert!(experience.contains("Experience timeline will appear here once added"));
    }

    #[test]
    fn test_skill_bars() {
        assert_eq!(filled_cells(0.0), 0);
        assert_eq!(filled_cells(50.0), 10);
        assert_eq!(filled_cells(100.0), BAR_WIDTH);
        assert_eq!(filled_cells(150.0), BAR_WIDTH);

        let portfolio = Portfolio {
            skills: vec![skill("Rust", "Languages", 90.0), skill("Git", "Tools", 75.0)],
            ..Portfolio::default()
        };
        let out = text(&section_lines(
            Section::Skills,
            &portfolio,
            &ContactForm::new(),
            &ContactInfo::default(),
        ));
        assert!(out.contains("Languages"));
        assert!(out.contains("Tools"));
        assert!(out.contains(" 90%"));
        assert!(out.contains(&"█".repeat(18)));
    }

    #[test]
    fn test_contact_form_shows_error() {
        let mut form = ContactForm::new();
        assert!(form.submit().is_none());
        let out = contact_text(&form, &ContactInfo::default());
        assert!(out.contains("Name is required."));
        assert!(out.contains("Send Message"));
    }

    #[test]
    fn test_contact_sending_disables_button() {
        let mut form = ContactForm::new();
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Hi".into();
        assert!(form.submit().is_some());
        let out = contact_text(&form, &ContactInfo::default());
        assert!(out.contains("Sending..."));
        assert!(!out.contains("Send Message"));

        form.finish(Ok(()));
        let out = contact_text(&form, &ContactInfo::default());
        assert!(out.contains("Message Sent!"));
    }

    #[test]
    fn test_contact_info_precedes_form() {
        let info = ContactInfo {
            email: Some("me@example.com".into()),
            phone: None,
            location: Some("Lampung, Indonesia".into()),
            links: vec![SocialLink {
                label: "GitHub".into(),
                url: "https://github.com/example".into(),
            }],
        };
        let out = contact_text(&ContactForm::new(), &info);
        assert!(out.contains("me@example.com"));
        assert!(out.contains("Lampung, Indonesia"));
        assert!(out.contains("GitHub"));
        assert!(!out.contains("☎"));
        let link = out.find("https://github.com/example").unwrap();
        assert!(link < out.find("Send Message").unwrap());

        // Nothing configured, nothing listed.
        let bare = contact_text(&ContactForm::new(), &ContactInfo::default());
        assert!(!bare.contains("✉ "));
    }

    #[test]
    fn test_blog_shows_post_path() {
        let date = "2024-01-15T10:00:00Z".parse().unwrap();
        let portfolio = Portfolio {
            posts: vec![BlogPost {
                id: "p1".into(),
                title: "Hello".into(),
                slug: "hello-world".into(),
                content: "Body".into(),
                excerpt: None,
                published: true,
                cover_image: None,
                created_at: date,
                updated_at: date,
            }],
            ..Portfolio::default()
        };
        let out = text(&section_lines(
            Section::Blog,
            &portfolio,
            &ContactForm::new(),
            &ContactInfo::default(),
        ));
        assert!(out.contains("January 15, 2024"));
        assert!(out.contains("/blog/hello-world"));
    }
}
