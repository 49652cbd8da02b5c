use crate::config::site_config::{ContactConfig, SiteConfig, SiteInfo};
use crate::core::templates;
use crate::core::Clock;
use crate::domain::model::{Experience, Post, Project, RenderedPage, RenderedSite, SiteContent};
use crate::domain::services::{format_date, format_duration, parse_date_token};
use crate::utils::error::Result;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use tera::{Context, Tera};

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub formatted_duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    pub name: String,
    pub date_label: String,
    pub summary: String,
    pub github: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub date_label: String,
    /// Date plus a relative suffix, shown on the post page.
    pub published_label: String,
    pub summary: String,
    pub image: Option<String>,
    pub body_html: String,
}

#[derive(Debug, Clone, Serialize)]
struct SitemapEntry {
    route: String,
    lastmod: String,
}

/// Renders already-ordered content into pages.
pub struct SiteRenderer {
    template_engine: Tera,
    site: SiteInfo,
    contact: ContactConfig,
    base_url: String,
}

impl SiteRenderer {
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut template_engine = Tera::default();
        template_engine.add_raw_templates(vec![
            ("base.html", templates::BASE),
            ("partials/experience_list.html", templates::EXPERIENCE_LIST),
            ("partials/project_list.html", templates::PROJECT_LIST),
            ("partials/post_list.html", templates::POST_LIST),
            ("index.html", templates::HOME),
            ("experience.html", templates::EXPERIENCE),
            ("projects.html", templates::PROJECTS),
            ("blog.html", templates::BLOG_INDEX),
            ("post.html", templates::BLOG_POST),
            ("contact.html", templates::CONTACT),
            ("sitemap.xml", templates::SITEMAP),
            ("robots.txt", templates::ROBOTS),
        ])?;
        template_engine.set_escape_fn(escape_markup);

        Ok(Self {
            template_engine,
            site: config.site.clone(),
            contact: config.contact.clone().unwrap_or(ContactConfig {
                email: None,
                calendly_url: None,
            }),
            base_url: config.base_url().to_string(),
        })
    }

    pub fn render_site(&self, content: &SiteContent, clock: &dyn Clock) -> Result<RenderedSite> {
        let experiences = experience_views(&content.experiences, clock)?;
        let projects = project_views(&content.projects, clock)?;
        let posts = post_views(&content.posts, clock)?;

        let mut pages = Vec::new();

        let mut context = self.base_context("/", "", "");
        context.insert("experiences", &experiences);
        context.insert("projects", &projects);
        context.insert("posts", &posts);
        pages.push(self.page("index.html", "index.html", &context)?);

        let mut context =
            self.base_context("/experience", "Experience", "Check out my work experience.");
        context.insert("experiences", &experiences);
        pages.push(self.page("experience/index.html", "experience.html", &context)?);

        let mut context = self.base_context("/projects", "Projects", "Look at my work.");
        context.insert("projects", &projects);
        pages.push(self.page("projects/index.html", "projects.html", &context)?);

        let mut context = self.base_context("/blog", "Blog", "Read my blog.");
        context.insert("posts", &posts);
        pages.push(self.page("blog/index.html", "blog.html", &context)?);

        for post in &posts {
            let route = format!("/blog/{}", post.slug);
            let mut context = self.base_context(&route, &post.title, &post.summary);
            context.insert("post", post);
            pages.push(self.page(
                &format!("blog/{}/index.html", post.slug),
                "post.html",
                &context,
            )?);
        }

        let context = self.base_context(
            "/contact",
            "Contact Me",
            "Set up a meeting or drop me a message.",
        );
        pages.push(self.page("contact/index.html", "contact.html", &context)?);

        let mut context = Context::new();
        context.insert("base_url", &self.base_url);
        context.insert("entries", &sitemap_entries(&content.posts, clock));
        pages.push(self.page("sitemap.xml", "sitemap.xml", &context)?);
        pages.push(self.page("robots.txt", "robots.txt", &context)?);

        tracing::debug!("Rendered {} pages", pages.len());
        Ok(RenderedSite { pages })
    }

    fn base_context(&self, route: &str, page_title: &str, page_description: &str) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site);
        context.insert("contact", &self.contact);
        context.insert("base_url", &self.base_url);
        context.insert("route", route);
        context.insert("page_title", page_title);
        context.insert("page_description", page_description);
        context
    }

    fn page(&self, path: &str, template: &str, context: &Context) -> Result<RenderedPage> {
        let body = self.template_engine.render(template, context)?;
        Ok(RenderedPage {
            path: path.to_string(),
            body,
        })
    }
}

pub fn experience_views(experiences: &[Experience], clock: &dyn Clock) -> Result<Vec<ExperienceView>> {
    experiences
        .iter()
        .map(|exp| -> Result<ExperienceView> {
            Ok(ExperienceView {
                company: exp.company.clone(),
                position: exp.position.clone(),
                duration: exp.duration.clone(),
                location: exp.location.clone(),
                description: exp.description.clone(),
                formatted_duration: format_duration(&exp.duration, clock)?,
            })
        })
        .collect()
}

pub fn project_views(projects: &[Project], clock: &dyn Clock) -> Result<Vec<ProjectView>> {
    let today = clock.today();
    projects
        .iter()
        .map(|project| -> Result<ProjectView> {
            let date = parse_date_token(&project.date)?;
            Ok(ProjectView {
                name: project.name.clone(),
                date_label: format_date(date, false, today),
                summary: project.summary.clone(),
                github: project.github.clone(),
            })
        })
        .collect()
}

/// List entries carry the plain date; the post page itself gets the relative suffix.
pub fn post_views(posts: &[Post], clock: &dyn Clock) -> Result<Vec<PostView>> {
    let today = clock.today();
    posts
        .iter()
        .map(|post| -> Result<PostView> {
            let date = parse_date_token(&post.metadata.published_at)?;
            Ok(PostView {
                slug: post.slug.clone(),
                title: post.metadata.title.clone(),
                date_label: format_date(date, false, today),
                published_label: format_date(date, true, today),
                summary: post.metadata.summary.clone(),
                image: post.metadata.image.clone(),
                body_html: markdown_to_html(&post.content),
            })
        })
        .collect()
}

pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;
    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

fn sitemap_entries(posts: &[Post], clock: &dyn Clock) -> Vec<SitemapEntry> {
    let today = clock.today().format("%Y-%m-%d").to_string();

    let mut entries: Vec<SitemapEntry> = ["", "/blog", "/projects", "/experience", "/contact"]
        .iter()
        .map(|route| SitemapEntry {
            route: route.to_string(),
            lastmod: today.clone(),
        })
        .collect();

    entries.extend(posts.iter().map(|post| SitemapEntry {
        route: format!("/blog/{}", post.slug),
        lastmod: parse_date_token(&post.metadata.published_at)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| today.clone()),
    }));

    entries
}

/// Like Tera's default escaping, but leaves `/` alone so URLs stay readable.
fn escape_markup(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(c),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::domain::model::PostMetadata;
    use chrono::NaiveDate;

    fn config() -> SiteConfig {
        SiteConfig::from_toml_str(
            r#"
[site]
title = "Test Corner"
base_url = "https://example.dev/"
intro = "Builder of <small> things & more."

[contact]
email = "me@example.dev"
"#,
        )
        .unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
    }

    fn content() -> SiteContent {
        SiteContent {
            experiences: vec![Experience {
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                duration: "Jan 2023 - present".to_string(),
                location: "Remote".to_string(),
                description: "Built rockets.".to_string(),
            }],
            projects: vec![Project {
                name: "folio".to_string(),
                date: "2024-02-10".to_string(),
                summary: "A site generator.".to_string(),
                github: "https://github.com/me/folio".to_string(),
            }],
            posts: vec![Post {
                slug: "hello".to_string(),
                metadata: PostMetadata {
                    title: "Hello, world".to_string(),
                    published_at: "2024-06-01".to_string(),
                    summary: "First post.".to_string(),
                    image: None,
                },
                content: "# Hi\n\nSome *markdown*.".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_site_pages() {
        let renderer = SiteRenderer::new(&config()).unwrap();
        let site = renderer.render_site(&content(), &clock()).unwrap();

        let paths: Vec<&str> = site.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "index.html",
                "experience/index.html",
                "projects/index.html",
                "blog/index.html",
                "blog/hello/index.html",
                "contact/index.html",
                "sitemap.xml",
                "robots.txt",
            ]
        );

        let home = &site.page("index.html").unwrap().body;
        assert!(home.contains("Engineer at Acme"));
        assert!(home.contains("Jan 2023 - present | Remote | 1 year 6 months"));
        assert!(home.contains("February 10, 2024"));
        assert!(home.contains(r#"href="https://github.com/me/folio""#));
        assert!(home.contains(r#"href="/blog/hello""#));
        assert!(home.contains("Builder of &lt;small&gt; things &amp; more."));
    }

    #[test]
    fn test_post_page_renders_markdown() {
        let renderer = SiteRenderer::new(&config()).unwrap();
        let site = renderer.render_site(&content(), &clock()).unwrap();
        let post = &site.page("blog/hello/index.html").unwrap().body;

        assert!(post.contains("<title>Hello, world | Test Corner</title>"));
        assert!(post.contains("<h1>Hi</h1>"));
        assert!(post.contains("<em>markdown</em>"));
        assert!(post.contains("June 1, 2024 (19d ago)"));
    }

    #[test]
    fn test_contact_without_calendly() {
        let renderer = SiteRenderer::new(&config()).unwrap();
        let site = renderer.render_site(&content(), &clock()).unwrap();
        let contact = &site.page("contact/index.html").unwrap().body;

        assert!(contact.contains("mailto:me@example.dev"));
        assert!(!contact.contains("<iframe"));
    }

    #[test]
    fn test_sitemap_and_robots() {
        let renderer = SiteRenderer::new(&config()).unwrap();
        let site = renderer.render_site(&content(), &clock()).unwrap();

        let sitemap = &site.page("sitemap.xml").unwrap().body;
        assert!(sitemap.contains("<loc>https://example.dev/blog/hello</loc>"));
        assert!(sitemap.contains("<lastmod>2024-06-01</lastmod>"));
        assert!(sitemap.contains("<lastmod>2024-06-20</lastmod>"));

        let robots = &site.page("robots.txt").unwrap().body;
        assert!(robots.contains("Sitemap: https://example.dev/sitemap.xml"));
    }

    #[test]
    fn test_bad_duration_fails_render() {
        let renderer = SiteRenderer::new(&config()).unwrap();
        let mut content = content();
        content.experiences[0].duration = "Jan 2023 until now".to_string();
        assert!(renderer.render_site(&content, &clock()).is_err());
    }

    #[test]
    fn test_markdown_to_html() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |\n\n~~gone~~");
        assert!(html.contains("<table>"));
        assert!(html.contains("<del>gone</del>"));
    }
}
