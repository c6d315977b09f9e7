//! HTML templates for the portfolio pages
//!
//! Pages render as fragments; full requests get the fragment wrapped in
//! [`layout_html`], HTMX requests get the bare fragment.

use folio_core::content::{Catalogs, Profile};
use folio_core::filter::ALL_CATEGORIES;
use folio_core::{CatalogEntry, CatalogKind, ContactMessage, EntryDetail, PageView, SiteContent};
use url::form_urlencoded;

/// CSS styles
pub const STYLE_CSS: &str = r#"
:root {
    --bg: #f9fafb;
    --surface: #ffffff;
    --mint: #2f9e7a;
    --mint-soft: #e8f7f1;
    --lavender: #7c6bc4;
    --lavender-soft: #f1eefb;
    --text: #1f2937;
    --text-dim: #6b7280;
    --border: #e5e7eb;
    --danger: #c0392b;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: 'Inter', system-ui, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.navbar {
    position: sticky;
    top: 0;
    z-index: 10;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 32px;
    background: rgba(255, 255, 255, 0.9);
    border-bottom: 1px solid var(--border);
}

.brand { font-weight: 700; color: var(--mint); }
.nav-links { display: flex; gap: 8px; list-style: none; }
.nav-links a { padding: 6px 12px; border-radius: 8px; color: var(--text-dim); }
.nav-links a.active, .nav-links a:hover { color: var(--mint); background: var(--mint-soft); }

main { max-width: 1100px; margin: 0 auto; padding: 32px 24px 64px; }

.page-header { text-align: center; padding: 48px 0 32px; }
.page-header h1 { font-size: 2.4em; margin-bottom: 12px; }
.page-header p { color: var(--text-dim); max-width: 720px; margin: 0 auto; }

.hero { display: flex; gap: 32px; align-items: center; padding: 64px 0; }
.hero img { width: 160px; height: 160px; border-radius: 50%; border: 4px solid var(--surface); }
.hero h1 { font-size: 2.8em; }
.cta { display: inline-block; margin-top: 16px; margin-right: 12px; padding: 10px 20px; border-radius: 8px; background: var(--mint); color: #fff; }
.cta.secondary { background: var(--lavender-soft); color: var(--lavender); }

.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px; }
.card { background: var(--surface); border-radius: 12px; padding: 24px; box-shadow: 0 1px 3px rgba(0,0,0,0.06); }
.card h3 { margin-bottom: 8px; }
.card img { width: 100%; height: 180px; object-fit: cover; border-radius: 8px; margin-bottom: 12px; }
.card.featured { border: 2px solid var(--mint); }

.meta { display: flex; gap: 8px; flex-wrap: wrap; font-size: 0.85em; color: var(--text-dim); margin-bottom: 8px; }
.pill { padding: 2px 10px; border-radius: 999px; background: var(--mint-soft); color: var(--mint); font-size: 0.85em; }
.pill.tag { background: var(--lavender-soft); color: var(--lavender); }

.toolbar { display: flex; flex-wrap: wrap; gap: 12px; justify-content: space-between; margin-bottom: 32px; }
.search-input { flex: 1; min-width: 240px; padding: 10px 14px; border: 1px solid var(--border); border-radius: 8px; }
.tabs { display: flex; gap: 8px; flex-wrap: wrap; }
.tab { padding: 8px 16px; border-radius: 8px; background: var(--bg); color: var(--text-dim); }
.tab.active { background: var(--mint-soft); color: var(--mint); }

.section-title { font-size: 1.5em; margin: 32px 0 16px; }
.empty { text-align: center; color: var(--text-dim); padding: 40px; }

.modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; padding: 16px; z-index: 50; }
.modal { background: var(--surface); border-radius: 12px; max-width: 680px; width: 100%; max-height: 90vh; overflow-y: auto; padding: 24px; position: relative; }
.modal .close { position: absolute; top: 12px; right: 16px; font-size: 1.4em; color: var(--text-dim); }
.author-note { background: var(--mint-soft); color: var(--mint); padding: 12px 16px; border-radius: 8px; font-style: italic; margin: 16px 0; }

.timeline-item { border-left: 3px solid var(--mint); padding-left: 20px; margin-bottom: 28px; }
.timeline-item ul, .article ul, .modal ul { margin: 8px 0 0 20px; }

.article { max-width: 760px; margin: 0 auto; }
.article h2 { margin: 28px 0 12px; }
.article p { margin-bottom: 12px; }
.related { margin-top: 48px; }

.contact-form { display: flex; flex-direction: column; gap: 12px; }
.contact-form input, .contact-form textarea { padding: 10px 14px; border: 1px solid var(--border); border-radius: 8px; font: inherit; }
.contact-form button { padding: 10px 20px; background: var(--mint); color: #fff; border: none; border-radius: 8px; cursor: pointer; }
.flash-ok { background: var(--mint-soft); color: var(--mint); padding: 12px 16px; border-radius: 8px; }
.flash-warn { background: #fdecea; color: var(--danger); padding: 12px 16px; border-radius: 8px; }

.reveal > * { animation: fade-up 0.5s ease both; }
.reveal > *:nth-child(2) { animation-delay: 0.1s; }
.reveal > *:nth-child(3) { animation-delay: 0.2s; }
.reveal > *:nth-child(4) { animation-delay: 0.3s; }
.reveal > *:nth-child(n+5) { animation-delay: 0.4s; }

@keyframes fade-up {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

footer { text-align: center; color: var(--text-dim); padding: 32px; border-top: 1px solid var(--border); }
"#;

/// Navigation entries: (path, label)
pub const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/experience", "Experience"),
    ("/projects", "Projects"),
    ("/skills", "Skills"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape, then turn `**bold**` pairs into `<strong>`
pub fn emphasis(s: &str) -> String {
    let escaped = html_escape(s);
    let mut out = String::with_capacity(escaped.len());
    let mut parts = escaped.split("**").peekable();
    let mut bold = false;
    while let Some(part) = parts.next() {
        out.push_str(part);
        if parts.peek().is_some() {
            out.push_str(if bold { "</strong>" } else { "<strong>" });
            bold = !bold;
        }
    }
    if bold {
        out.push_str("</strong>");
    }
    out
}

/// Build `path?key=value&...`, skipping empty values
pub fn listing_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params.iter().filter(|(_, v)| !v.is_empty()) {
        query.append_pair(key, value);
        any = true;
    }
    if any {
        format!("{}?{}", path, query.finish())
    } else {
        path.to_string()
    }
}

fn pills(labels: &[String], class: &str) -> String {
    labels
        .iter()
        .map(|l| format!("<span class=\"pill {}\">{}</span>", class, html_escape(l)))
        .collect()
}

fn list_items(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("<li>{}</li>", emphasis(i)))
        .collect()
}

fn reveal_class(view: &PageView<'_>) -> &'static str {
    if view.plays_entrance() {
        "reveal"
    } else {
        ""
    }
}

// ============== Layout ==============

/// Full page shell around a fragment
pub fn layout_html(title: &str, active: &str, profile: &Profile, content: &str) -> String {
    let links: String = NAV
        .iter()
        .map(|(path, label)| {
            let class = if *path == active { " class=\"active\"" } else { "" };
            format!(
                "<li><a href=\"{path}\"{class} hx-get=\"{path}\" hx-target=\"#main\" hx-push-url=\"true\">{label}</a></li>"
            )
        })
        .collect();

    format!(
"<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title} | {name}</title>
    <link rel=\"stylesheet\" href=\"/static/style.css\">
    <script src=\"https://unpkg.com/htmx.org@1.9.10\"></script>
</head>
<body>
    <nav class=\"navbar\">
        <a class=\"brand\" href=\"/\">{name}</a>
        <ul class=\"nav-links\">{links}</ul>
    </nav>
    <main id=\"main\">
{content}
    </main>
    <footer>&copy; {year} {name}</footer>
</body>
</html>",
        title = html_escape(title),
        name = html_escape(&profile.name),
        links = links,
        content = content,
        year = chrono::Utc::now().format("%Y"),
    )
}

fn page_header(title: &str, description: &str) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p>{}</p></header>",
        html_escape(title),
        html_escape(description)
    )
}

// ============== Static pages ==============

/// Home: hero, highlights and the latest posts
pub fn home_html(content: &SiteContent, catalogs: &Catalogs) -> String {
    let profile = &content.profile;
    let avatar = profile
        .avatar
        .as_deref()
        .map(|src| format!("<img src=\"{}\" alt=\"{}\">", html_escape(src), html_escape(&profile.name)))
        .unwrap_or_default();

    let highlights: String = content
        .about
        .highlights
        .iter()
        .map(|h| {
            format!(
                "<div class=\"card\"><h3>{}</h3><p>{}</p></div>",
                html_escape(&h.title),
                html_escape(&h.description)
            )
        })
        .collect();

    let latest: String = catalogs
        .blog
        .load()
        .iter()
        .take(3)
        .map(post_card_html)
        .collect();

    format!(
        "<section class=\"hero reveal\">
            {avatar}
            <div>
                <h1>{name}</h1>
                <p>{headline}</p>
                <p>{tagline}</p>
                <a class=\"cta\" href=\"/projects\">View My Work</a>
                <a class=\"cta secondary\" href=\"/contact\">Get in Touch</a>
            </div>
        </section>
        <h2 class=\"section-title\">Highlights</h2>
        <div class=\"grid\">{highlights}</div>
        <h2 class=\"section-title\">Latest Writing</h2>
        <div class=\"grid\">{latest}</div>",
        avatar = avatar,
        name = html_escape(&profile.name),
        headline = html_escape(&profile.headline),
        tagline = html_escape(&profile.tagline),
        highlights = highlights,
        latest = latest,
    )
}

pub fn about_html(content: &SiteContent) -> String {
    let bio: String = content
        .about
        .bio
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    let highlights: String = content
        .about
        .highlights
        .iter()
        .map(|h| {
            format!(
                "<div class=\"timeline-item\"><h3>{}</h3><p>{}</p></div>",
                html_escape(&h.title),
                html_escape(&h.description)
            )
        })
        .collect();

    let awards: String = content
        .about
        .awards
        .iter()
        .map(|a| {
            format!(
                "<div class=\"card\"><h3>{}</h3><div class=\"meta\"><span>{}</span><span>{}</span></div></div>",
                html_escape(&a.title),
                html_escape(&a.issuer),
                html_escape(&a.year)
            )
        })
        .collect();

    format!(
        "{header}
        <section class=\"card reveal\">{bio}</section>
        <h2 class=\"section-title\">Career Highlights</h2>
        {highlights}
        <h2 class=\"section-title\">Awards &amp; Recognition</h2>
        <div class=\"grid\">{awards}</div>",
        header = page_header("About Me", &content.profile.headline),
        bio = bio,
        highlights = highlights,
        awards = awards,
    )
}

pub fn skills_html(content: &SiteContent) -> String {
    let groups: String = content
        .skills
        .groups
        .iter()
        .map(|g| {
            format!(
                "<div class=\"card\"><h3>{}</h3><div class=\"meta\">{}</div></div>",
                html_escape(&g.name),
                pills(&g.skills, "")
            )
        })
        .collect();

    let certifications: String = content
        .skills
        .certifications
        .iter()
        .map(|c| {
            format!(
                "<div class=\"card\"><h3>{}</h3><div class=\"meta\"><span>{}</span><span>{}</span></div></div>",
                html_escape(&c.name),
                html_escape(&c.issuer),
                html_escape(&c.year)
            )
        })
        .collect();

    format!(
        "{header}
        <div class=\"grid reveal\">{groups}</div>
        <h2 class=\"section-title\">Certifications</h2>
        <div class=\"grid\">{certifications}</div>",
        header = page_header(
            "Skills & Expertise",
            "The languages, frameworks and tools I work with"
        ),
        groups = groups,
        certifications = certifications,
    )
}

/// Outcome banner shown after a contact submission
pub enum Flash {
    Ok(String),
    Warn(String),
}

pub fn flash_html(flash: &Flash) -> String {
    match flash {
        Flash::Ok(msg) => format!("<div class=\"flash-ok\">{}</div>", html_escape(msg)),
        Flash::Warn(msg) => format!("<div class=\"flash-warn\">{}</div>", html_escape(msg)),
    }
}

pub fn contact_html(profile: &Profile, draft: &ContactMessage, flash: Option<&Flash>) -> String {
    let social: String = profile
        .social
        .iter()
        .map(|s| {
            format!(
                "<a class=\"pill tag\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a> ",
                html_escape(&s.href),
                html_escape(&s.label)
            )
        })
        .collect();

    let phone = profile
        .phone
        .as_deref()
        .map(|p| format!("<p><strong>Phone</strong><br>{}</p>", html_escape(p)))
        .unwrap_or_default();

    let flash = flash.map(flash_html).unwrap_or_default();

    format!(
        "{header}
        <div class=\"grid reveal\">
            <section class=\"card\">
                <h2>Contact Information</h2>
                <p><strong>Email</strong><br>{email}</p>
                {phone}
                <p><strong>Location</strong><br>{location}</p>
                <div class=\"meta\">{social}</div>
            </section>
            <section class=\"card\">
                <form class=\"contact-form\" method=\"post\" action=\"/contact\" hx-post=\"/contact\" hx-target=\"#contact-result\">
                    <input type=\"text\" name=\"name\" placeholder=\"Your name\" value=\"{name}\">
                    <input type=\"email\" name=\"email\" placeholder=\"you@example.com\" value=\"{from}\">
                    <textarea name=\"message\" rows=\"6\" placeholder=\"Your message\">{message}</textarea>
                    <button type=\"submit\">Send Message</button>
                </form>
                <div id=\"contact-result\">{flash}</div>
            </section>
        </div>",
        header = page_header(
            "Get in Touch",
            "Have a question or want to work together? I'd love to hear from you."
        ),
        email = html_escape(&profile.email),
        phone = phone,
        location = html_escape(&profile.location),
        social = social,
        name = html_escape(&draft.name),
        from = html_escape(&draft.email),
        message = html_escape(&draft.message),
        flash = flash,
    )
}

// ============== Listing building blocks ==============

/// Search box plus category tabs for a listing page
fn toolbar_html(view: &PageView<'_>, with_search: bool) -> String {
    let kind = view.catalog().kind();
    let path = format!("/{}", kind.slug());
    let query = view.filter().query.as_str();
    let active = view.filter().category.label().to_string();

    let mut labels = vec![ALL_CATEGORIES.to_string()];
    labels.extend(view.catalog().categories().iter().cloned());

    let tabs: String = labels
        .iter()
        .map(|label| {
            let url = html_escape(&listing_url(&path, &[("q", query), ("category", label)]));
            let class = if *label == active { "tab active" } else { "tab" };
            format!(
                "<a class=\"{class}\" href=\"{url}\" hx-get=\"{url}\" hx-target=\"#main\" hx-push-url=\"true\">{label}</a>",
                class = class,
                url = url,
                label = html_escape(label)
            )
        })
        .collect();

    let search = if with_search {
        format!(
            "<form action=\"{path}\" method=\"get\">
                <input type=\"hidden\" name=\"category\" value=\"{category}\">
                <input type=\"search\" name=\"q\" class=\"search-input\" value=\"{query}\" placeholder=\"Search {label}...\" autocomplete=\"off\"
                    hx-get=\"{path}\" hx-trigger=\"keyup changed delay:200ms, search\" hx-target=\"#listing\" hx-select=\"#listing\" hx-swap=\"outerHTML\" hx-include=\"closest form\">
            </form>",
            path = path,
            category = html_escape(&active),
            query = html_escape(query),
            label = kind.label().to_lowercase(),
        )
    } else {
        String::new()
    };

    format!("<div class=\"toolbar\">{}<div class=\"tabs\">{}</div></div>", search, tabs)
}

fn empty_html(view: &PageView<'_>) -> String {
    let query = &view.filter().query;
    if query.is_empty() {
        "<div class=\"empty\">Nothing in this category yet</div>".to_string()
    } else {
        format!(
            "<div class=\"empty\">No results for &ldquo;{}&rdquo;</div>",
            html_escape(query)
        )
    }
}

/// Links always carry the active tab, "All" included, so a catalog's
/// default tab never replaces the one the visitor picked.
fn select_url(view: &PageView<'_>, id: &str) -> String {
    let path = format!("/{}", view.catalog().kind().slug());
    let filter = view.filter();
    listing_url(
        &path,
        &[("q", &filter.query), ("category", filter.category.label()), ("selected", id)],
    )
}

fn close_url(view: &PageView<'_>) -> String {
    let path = format!("/{}", view.catalog().kind().slug());
    let filter = view.filter();
    listing_url(&path, &[("q", &filter.query), ("category", filter.category.label())])
}

// ============== Blog ==============

fn post_card_html(entry: &CatalogEntry) -> String {
    let Some(blog) = entry.as_blog() else {
        return String::new();
    };
    format!(
        "<a class=\"card\" href=\"/blog/{id}\">
            <div class=\"meta\"><span class=\"pill\">{category}</span><span>{read_time}</span><span>{date}</span></div>
            <h3>{title}</h3>
            <p>{summary}</p>
        </a>",
        id = html_escape(entry.id.as_str()),
        category = html_escape(&entry.category),
        read_time = html_escape(&blog.read_time),
        date = html_escape(&blog.date),
        title = html_escape(&entry.title),
        summary = html_escape(&entry.summary),
    )
}

fn blog_listing_card(view: &PageView<'_>, entry: &CatalogEntry, featured: bool) -> String {
    let Some(blog) = entry.as_blog() else {
        return String::new();
    };
    let url = html_escape(&select_url(view, entry.id.as_str()));
    let image = entry
        .image
        .as_deref()
        .map(|src| format!("<img src=\"{}\" alt=\"\">", html_escape(src)))
        .unwrap_or_default();
    format!(
        "<a class=\"card{featured}\" href=\"{url}\" hx-get=\"{url}\" hx-target=\"#main\" hx-push-url=\"true\">
            {image}
            <div class=\"meta\"><span class=\"pill\">{category}</span><span>{read_time}</span></div>
            <h3>{title}</h3>
            <p>{summary}</p>
            <div class=\"meta\">{tags}</div>
        </a>",
        featured = if featured { " featured" } else { "" },
        url = url,
        image = image,
        category = html_escape(&entry.category),
        read_time = html_escape(&blog.read_time),
        title = html_escape(&entry.title),
        summary = html_escape(&entry.summary),
        tags = pills(&entry.tags, "tag"),
    )
}

/// Quick view modal for one post
pub fn blog_quick_view_html(view: &PageView<'_>, entry: &CatalogEntry) -> String {
    let Some(blog) = entry.as_blog() else {
        return String::new();
    };
    let close = html_escape(&close_url(view));
    let note = if blog.author_note.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"author-note\"><strong>Author's Note:</strong> {}</div>",
            html_escape(&blog.author_note)
        )
    };
    format!(
        "<div class=\"modal-backdrop\">
            <div class=\"modal\" role=\"dialog\">
                <a class=\"close\" href=\"{close}\" hx-get=\"{close}\" hx-target=\"#main\" hx-push-url=\"true\">&times;</a>
                <div class=\"meta\"><span class=\"pill\">{category}</span><span>{read_time}</span></div>
                <h2>{title}</h2>
                <p>{summary}</p>
                {note}
                <div class=\"meta\">{tags}</div>
                <a class=\"cta\" href=\"/blog/{id}\">Read Full Article</a>
            </div>
        </div>",
        close = close,
        category = html_escape(&entry.category),
        read_time = html_escape(&blog.read_time),
        title = html_escape(&entry.title),
        summary = html_escape(&entry.summary),
        note = note,
        tags = pills(&entry.tags, "tag"),
        id = html_escape(entry.id.as_str()),
    )
}

/// Blog listing: search, category tabs, featured and regular posts
pub fn blog_html(view: &PageView<'_>, profile: &Profile) -> String {
    let (featured, regular) = view.visible_by_feature();

    let listing = if featured.is_empty() && regular.is_empty() {
        empty_html(view)
    } else {
        let featured_html = if featured.is_empty() {
            String::new()
        } else {
            let cards: String = featured
                .iter()
                .map(|e| blog_listing_card(view, e, true))
                .collect();
            format!(
                "<h2 class=\"section-title\">Featured Stories</h2><div class=\"grid\">{}</div>",
                cards
            )
        };
        let regular_cards: String = regular
            .iter()
            .map(|e| blog_listing_card(view, e, false))
            .collect();
        format!(
            "{}<h2 class=\"section-title\">All Articles</h2><div class=\"grid\">{}</div>",
            featured_html, regular_cards
        )
    };

    let modal = view
        .selected()
        .map(|entry| blog_quick_view_html(view, entry))
        .unwrap_or_default();

    format!(
        "{header}
        <section class=\"card\">
            <h2>Hi, I'm {name}</h2>
            <p>I write about technology, leadership, and the intersection of both.</p>
        </section>
        {toolbar}
        <div id=\"listing\" class=\"{reveal}\">{listing}</div>
        {modal}",
        header = page_header(
            "Welcome to My Digital Garden",
            "A collection of thoughts, stories, and insights from my journey in tech and leadership"
        ),
        name = html_escape(profile.name.split_whitespace().next().unwrap_or_default()),
        toolbar = toolbar_html(view, true),
        reveal = reveal_class(view),
        listing = listing,
        modal = modal,
    )
}

/// Full article page
pub fn article_html(entry: &CatalogEntry, related: &[&CatalogEntry], profile: &Profile) -> String {
    let Some(blog) = entry.as_blog() else {
        return not_found_html(CatalogKind::Blog, entry.id.as_str());
    };

    let body: String = if blog.sections.is_empty() {
        format!("<p>{}</p>", html_escape(&entry.summary))
    } else {
        blog.sections
            .iter()
            .map(|section| {
                let paragraphs: String = section
                    .paragraphs
                    .iter()
                    .map(|p| format!("<p>{}</p>", emphasis(p)))
                    .collect();
                let bullets = if section.bullets.is_empty() {
                    String::new()
                } else {
                    format!("<ul>{}</ul>", list_items(&section.bullets))
                };
                format!(
                    "<h2>{}</h2>{}{}",
                    html_escape(&section.heading),
                    paragraphs,
                    bullets
                )
            })
            .collect()
    };

    let related_html = if related.is_empty() {
        String::new()
    } else {
        let cards: String = related.iter().map(|e| post_card_html(e)).collect();
        format!(
            "<section class=\"related\"><h3 class=\"section-title\">Related Articles</h3><div class=\"grid\">{}</div></section>",
            cards
        )
    };

    format!(
        "<article class=\"article reveal\">
            <a href=\"/blog\" hx-get=\"/blog\" hx-target=\"#main\" hx-push-url=\"true\">&larr; Back to Blog</a>
            <div class=\"meta\"><span class=\"pill\">{category}</span><span>{read_time}</span><span>{date}</span></div>
            <h1>{title}</h1>
            <p class=\"meta\">{author} &middot; {role}</p>
            {body}
            <div class=\"meta\">{tags}</div>
        </article>
        {related}",
        category = html_escape(&entry.category),
        read_time = html_escape(&blog.read_time),
        date = html_escape(&blog.date),
        title = html_escape(&entry.title),
        author = html_escape(&profile.name),
        role = html_escape(&profile.headline),
        body = body,
        tags = pills(&entry.tags, "tag"),
        related = related_html,
    )
}

// ============== Projects ==============

fn project_card_html(view: &PageView<'_>, entry: &CatalogEntry) -> String {
    let url = html_escape(&select_url(view, entry.id.as_str()));
    let image = entry
        .image
        .as_deref()
        .map(|src| format!("<img src=\"{}\" alt=\"\">", html_escape(src)))
        .unwrap_or_default();
    format!(
        "<a class=\"card\" href=\"{url}\" hx-get=\"{url}\" hx-target=\"#main\" hx-push-url=\"true\">
            {image}
            <h3>{title}</h3>
            <p>{summary}</p>
            <div class=\"meta\">{tags}</div>
        </a>",
        url = url,
        image = image,
        title = html_escape(&entry.title),
        summary = html_escape(&entry.summary),
        tags = pills(&entry.tags, "tag"),
    )
}

fn project_links_html(entry: &CatalogEntry) -> String {
    let Some(project) = entry.as_project() else {
        return String::new();
    };
    let mut links = String::new();
    if let Some(live) = &project.live_url {
        links.push_str(&format!(
            "<a class=\"cta\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Live Demo</a>",
            html_escape(live)
        ));
    }
    if let Some(code) = &project.code_url {
        links.push_str(&format!(
            "<a class=\"cta secondary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Code</a>",
            html_escape(code)
        ));
    }
    links
}

/// Project detail modal
pub fn project_modal_html(view: &PageView<'_>, entry: &CatalogEntry) -> String {
    let Some(project) = entry.as_project() else {
        return String::new();
    };
    let close = html_escape(&close_url(view));
    format!(
        "<div class=\"modal-backdrop\">
            <div class=\"modal\" role=\"dialog\">
                <a class=\"close\" href=\"{close}\" hx-get=\"{close}\" hx-target=\"#main\" hx-push-url=\"true\">&times;</a>
                <h2>{title}</h2>
                <p>{summary}</p>
                <h4>Technologies Used</h4>
                <div class=\"meta\">{tags}</div>
                <h4>Key Challenges &amp; Solutions</h4>
                <ul>{challenges}</ul>
                <div>{links}</div>
            </div>
        </div>",
        close = close,
        title = html_escape(&entry.title),
        summary = html_escape(&entry.summary),
        tags = pills(&entry.tags, "tag"),
        challenges = list_items(&project.challenges),
        links = project_links_html(entry),
    )
}

/// Project gallery: featured project on top, the rest in a grid
pub fn projects_html(view: &PageView<'_>) -> String {
    let (featured, regular) = view.visible_by_feature();

    let listing = if featured.is_empty() && regular.is_empty() {
        empty_html(view)
    } else {
        let featured_html: String = featured
            .iter()
            .map(|entry| {
                let url = html_escape(&select_url(view, entry.id.as_str()));
                format!(
                    "<section class=\"card featured\">
                        <h2><a href=\"{url}\" hx-get=\"{url}\" hx-target=\"#main\" hx-push-url=\"true\">{title}</a></h2>
                        <p>{summary}</p>
                        <div class=\"meta\">{tags}</div>
                        <div>{links}</div>
                    </section>",
                    url = url,
                    title = html_escape(&entry.title),
                    summary = html_escape(&entry.summary),
                    tags = pills(&entry.tags, "tag"),
                    links = project_links_html(entry),
                )
            })
            .collect();
        let cards: String = regular
            .iter()
            .map(|e| project_card_html(view, e))
            .collect();
        format!(
            "{}<h2 class=\"section-title\">More Projects</h2><div class=\"grid\">{}</div>",
            featured_html, cards
        )
    };

    let modal = view
        .selected()
        .map(|entry| project_modal_html(view, entry))
        .unwrap_or_default();

    format!(
        "{header}
        {toolbar}
        <div id=\"listing\" class=\"{reveal}\">{listing}</div>
        {modal}",
        header = page_header(
            "Featured Projects",
            "A showcase of my recent work and technical achievements"
        ),
        toolbar = toolbar_html(view, true),
        reveal = reveal_class(view),
        listing = listing,
        modal = modal,
    )
}

// ============== Experience ==============

fn experience_item_html(entry: &CatalogEntry) -> String {
    let EntryDetail::Experience(record) = &entry.detail else {
        return String::new();
    };
    format!(
        "<div class=\"timeline-item\">
            <h3>{title}</h3>
            <div class=\"meta\"><span>{company}</span><span>{location}</span><span>{period}</span></div>
            <ul>{achievements}</ul>
            <div class=\"meta\">{tags}</div>
        </div>",
        title = html_escape(&entry.title),
        company = html_escape(&record.company),
        location = html_escape(&record.location),
        period = html_escape(&record.period),
        achievements = list_items(&record.achievements),
        tags = pills(&entry.tags, "tag"),
    )
}

/// Experience page: category tabs over a timeline
pub fn experience_html(view: &PageView<'_>) -> String {
    let visible = view.visible();
    let listing = if visible.is_empty() {
        empty_html(view)
    } else {
        visible.iter().map(|e| experience_item_html(e)).collect()
    };

    format!(
        "{header}
        {toolbar}
        <div id=\"listing\" class=\"{reveal}\">{listing}</div>",
        header = page_header(
            "Experience & Achievements",
            "A journey through my professional growth, leadership roles, and contributions"
        ),
        toolbar = toolbar_html(view, false),
        reveal = reveal_class(view),
        listing = listing,
    )
}

// ============== Errors ==============

pub fn not_found_html(kind: CatalogKind, id: &str) -> String {
    format!(
        "<div class=\"empty\">
            <h1>Not found</h1>
            <p>There is no {label} entry called &ldquo;{id}&rdquo;.</p>
            <a class=\"cta\" href=\"/{slug}\">Back to {label}</a>
        </div>",
        label = kind.label(),
        id = html_escape(id),
        slug = kind.slug(),
    )
}

pub fn page_not_found_html(path: &str) -> String {
    format!(
        "<div class=\"empty\">
            <h1>Page not found</h1>
            <p>Nothing lives at <code>{}</code>.</p>
            <a class=\"cta\" href=\"/\">Go home</a>
        </div>",
        html_escape(path)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Category;

    fn content() -> (SiteContent, Catalogs) {
        let content = SiteContent::builtin();
        let catalogs = content.catalogs().unwrap();
        (content, catalogs)
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(emphasis("a **b** c"), "a <strong>b</strong> c");
        assert_eq!(emphasis("**x** and **y**"), "<strong>x</strong> and <strong>y</strong>");
        assert_eq!(emphasis("open **end"), "open <strong>end</strong>");
        assert_eq!(emphasis("<b>"), "&lt;b&gt;");
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(listing_url("/blog", &[]), "/blog");
        assert_eq!(listing_url("/blog", &[("q", ""), ("category", "")]), "/blog");
        assert_eq!(
            listing_url("/blog", &[("q", "ai ethics"), ("category", "Volunteer Work")]),
            "/blog?q=ai+ethics&category=Volunteer+Work"
        );
    }

    #[test]
    fn test_blog_listing_marks_active_tab_and_splits_featured() {
        let (content, catalogs) = content();
        let mut view = PageView::mount(&catalogs.blog);
        view.set_category(Category::named("Technical"));

        let html = blog_html(&view, &content.profile);
        assert!(html.contains("class=\"tab active\" href=\"/blog?category=Technical\""));
        assert!(html.contains("Building Scalable React Applications"));
        assert!(!html.contains("The Ethics of AI"));
        assert!(!html.contains("Featured Stories"));
    }

    #[test]
    fn test_blog_empty_result_message() {
        let (content, catalogs) = content();
        let mut view = PageView::mount(&catalogs.blog);
        view.set_query("<zzz>");

        let html = blog_html(&view, &content.profile);
        assert!(html.contains("No results for &ldquo;&lt;zzz&gt;&rdquo;"));
    }

    #[test]
    fn test_blog_quick_view_only_for_known_ids() {
        let (content, catalogs) = content();
        let mut view = PageView::mount(&catalogs.blog);

        view.select("1");
        assert!(blog_html(&view, &content.profile).contains("Author's Note"));

        view.select("999");
        assert!(!blog_html(&view, &content.profile).contains("modal-backdrop"));
    }

    #[test]
    fn test_reveal_hint_controls_animation_class() {
        let (_, catalogs) = content();
        let mut view = PageView::mount(&catalogs.experience);
        assert!(experience_html(&view).contains("id=\"listing\" class=\"reveal\""));

        view.mark_revealed();
        assert!(experience_html(&view).contains("id=\"listing\" class=\"\""));
    }

    #[test]
    fn test_experience_defaults_to_professional() {
        let (_, catalogs) = content();
        let view = PageView::mount(&catalogs.experience);
        let html = experience_html(&view);
        assert!(html.contains("Software Engineering Intern"));
        assert!(!html.contains("Debate Team Leader"));
    }

    #[test]
    fn test_project_modal() {
        let (_, catalogs) = content();
        let mut view = PageView::mount(&catalogs.projects);
        view.select("weather-dashboard");

        let html = projects_html(&view);
        assert!(html.contains("Key Challenges &amp; Solutions"));
        assert!(html.contains("Integrated multiple weather data sources"));
    }

    #[test]
    fn test_article_renders_sections() {
        let (content, catalogs) = content();
        let entry = catalogs.blog.get("1").unwrap();
        let html = article_html(entry, &[], &content.profile);
        assert!(html.contains("<h2>Key Ethical Considerations</h2>"));
        assert!(html.contains("<li>Privacy and Data Protection</li>"));
        assert!(!html.contains("Related Articles"));
    }

    #[test]
    fn test_layout_highlights_active_nav() {
        let (content, _) = content();
        let html = layout_html("Blog", "/blog", &content.profile, "<p>body</p>");
        assert!(html.contains("<a href=\"/blog\" class=\"active\""));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("<title>Blog | Kenza ABOU-EL KASEM</title>"));
    }
}
