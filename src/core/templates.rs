//! Page templates compiled into the binary.

pub const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{% if page_title %}{{ page_title }} | {% endif %}{{ site.title }}</title>
    <meta name="description" content="{% if page_description %}{{ page_description }}{% else %}{{ site.description }}{% endif %}">
    <link rel="canonical" href="{{ base_url }}{{ route }}">
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #262626; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
        nav a { margin-right: 1rem; color: inherit; }
        h1 { font-size: 1.5rem; letter-spacing: -0.02em; }
        h2 { font-size: 1.5rem; }
        .meta { font-size: 0.875rem; color: #525252; }
        .entries > div { margin: 1.5rem 0; }
        .post-list a { display: flex; gap: 0.5rem; color: inherit; text-decoration: none; }
        .post-list .date { width: 10rem; font-variant-numeric: tabular-nums; color: #525252; }
        hr { border: 0; border-top: 1px solid #d4d4d4; margin-top: 2rem; }
        @media (prefers-color-scheme: dark) { body { background: #111; color: #e5e5e5; } .meta, .post-list .date { color: #a3a3a3; } }
    </style>
</head>
<body>
    <nav>
        <a href="/">home</a>
        <a href="/blog">blog</a>
        <a href="/projects">projects</a>
        <a href="/experience">experience</a>
        <a href="/contact">contact</a>
    </nav>
    <main>
{% block content %}{% endblock content %}
    </main>
</body>
</html>
"#;

pub const EXPERIENCE_LIST: &str = r#"<div class="entries experience-list">
{% for exp in experiences %}
    <div>
        <h3>{{ exp.position }} at {{ exp.company }}</h3>
        <p class="meta">{{ exp.duration }} | {{ exp.location }} | {{ exp.formatted_duration }}</p>
        <p>{{ exp.description }}</p>
    </div>
{% endfor %}
</div>
"#;

pub const PROJECT_LIST: &str = r#"<div class="post-list project-list">
{% for project in projects %}
    <a href="{{ project.github }}" target="_blank" rel="noopener noreferrer">
        <span class="date">{{ project.date_label }}</span>
        <span>{{ project.name }}</span>
    </a>
{% endfor %}
</div>
"#;

pub const POST_LIST: &str = r#"<div class="post-list">
{% for post in posts %}
    <a href="/blog/{{ post.slug }}">
        <span class="date">{{ post.date_label }}</span>
        <span>{{ post.title }}</span>
    </a>
{% endfor %}
</div>
"#;

pub const HOME: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>{{ site.title }}</h1>
    {% if site.intro %}<p>{{ site.intro }}</p>{% endif %}
    <h2>My Experience</h2>
    {% include "partials/experience_list.html" %}
    <hr>
    <h2>My Projects</h2>
    {% include "partials/project_list.html" %}
    <hr>
    <h2>My Blogs</h2>
    {% include "partials/post_list.html" %}
    <hr>
</section>
{% endblock content %}
"#;

pub const EXPERIENCE: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>My Experience</h1>
    {% include "partials/experience_list.html" %}
</section>
{% endblock content %}
"#;

pub const PROJECTS: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>My Projects</h1>
    <div class="entries project-cards">
    {% for project in projects %}
        <div>
            <h3>{{ project.name }}</h3>
            <p class="meta">{{ project.date_label }}</p>
            <p>{{ project.summary }}</p>
            <a href="{{ project.github }}" target="_blank" rel="noopener noreferrer">GitHub</a>
        </div>
    {% endfor %}
    </div>
</section>
{% endblock content %}
"#;

pub const BLOG_INDEX: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>My Blogs</h1>
    {% include "partials/post_list.html" %}
</section>
{% endblock content %}
"#;

pub const BLOG_POST: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>{{ post.title }}</h1>
    <p class="meta">{{ post.published_label }}</p>
    {% if post.image %}<img src="{{ post.image }}" alt="{{ post.title }}">{% endif %}
    <article class="prose">
{{ post.body_html | safe }}
    </article>
</section>
{% endblock content %}
"#;

pub const CONTACT: &str = r#"{% extends "base.html" %}
{% block content %}
<section>
    <h1>Contact Me</h1>
    <p>I would love to hear from you.{% if contact.calendly_url %} You can either schedule a meeting using the calendar below or email me directly.{% endif %}</p>
    {% if contact.calendly_url %}
    <div>
        <iframe src="{{ contact.calendly_url }}" style="width: 90%; height: 600px; border: 0;" title="Schedule a Meeting"></iframe>
    </div>
    {% endif %}
    {% if contact.email %}
    <p>{% if contact.calendly_url %}Or send{% else %}Send{% endif %} me an email at <a href="mailto:{{ contact.email }}">{{ contact.email }}</a></p>
    {% endif %}
</section>
{% endblock content %}
"#;

pub const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{% for entry in entries %}
    <url>
        <loc>{{ base_url }}{{ entry.route }}</loc>
        <lastmod>{{ entry.lastmod }}</lastmod>
    </url>
{% endfor %}
</urlset>
"#;

pub const ROBOTS: &str = r#"User-agent: *
Allow: /

Sitemap: {{ base_url }}/sitemap.xml
"#;
