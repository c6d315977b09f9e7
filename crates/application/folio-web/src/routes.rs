//! Route definitions for the portfolio site

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    // Pages
    ("GET", "/", "Home: hero, highlights, latest posts"),
    ("GET", "/about", "About: bio, highlights, awards"),
    ("GET", "/experience", "Experience timeline (?category=)"),
    ("GET", "/projects", "Project gallery (?q=&category=&selected=)"),
    ("GET", "/skills", "Skill groups and certifications"),
    ("GET", "/contact", "Contact information and form"),
    ("POST", "/contact", "Submit contact form"),
    ("GET", "/blog", "Blog search and filter (?q=&category=&selected=)"),
    ("GET", "/blog/:id", "Full article"),

    // API
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/:catalog", "Filtered entries as JSON (?q=&category=)"),

    // Static assets
    ("GET", "/static/style.css", "CSS stylesheet"),
];

/// Print all routes
pub fn print_routes() {
    println!("\nFolio Routes:");
    println!("{:-<60}", "");
    for (method, path, desc) in ROUTES {
        println!("{:6} {:20} {}", method, path, desc);
    }
    println!();
}
