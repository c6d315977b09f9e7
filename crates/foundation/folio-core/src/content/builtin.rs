//! Built-in portfolio content

use super::{About, Award, Certification, Highlight, Profile, SiteContent, SkillGroup, Skills, SocialLink};
use crate::catalog::CatalogConfig;
use crate::entry::{
    ArticleSection, BlogDetail, CatalogEntry, EntryDetail, EntryId, ExperienceDetail,
    ProjectDetail,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn content() -> SiteContent {
    SiteContent {
        profile: profile(),
        about: about(),
        blog: blog(),
        projects: projects(),
        experience: experience(),
        skills: skills(),
    }
}

fn profile() -> Profile {
    Profile {
        name: "Kenza ABOU-EL KASEM".to_string(),
        headline: "Software Engineer".to_string(),
        tagline: "A passionate developer crafting beautiful digital experiences".to_string(),
        avatar: Some("/static/avatar.png".to_string()),
        location: "Morocco".to_string(),
        email: "kabouelkasem1@gmail.com".to_string(),
        phone: None,
        social: vec![
            SocialLink { label: "GitHub".to_string(), href: "https://github.com".to_string() },
            SocialLink { label: "LinkedIn".to_string(), href: "https://linkedin.com".to_string() },
            SocialLink { label: "Twitter".to_string(), href: "https://twitter.com".to_string() },
        ],
    }
}

fn about() -> About {
    About {
        bio: strings(&[
            "I'm a passionate software engineer with a love for creating elegant solutions to complex problems.",
            "My journey in tech has been driven by curiosity, creativity, and a commitment to building applications that make a difference.",
        ]),
        highlights: vec![
            Highlight {
                title: "Nexus Forum Hackathon".to_string(),
                description: "Built \"EcoCrops\", an AI-powered platform that bridges technology and sustainability, empowering farmers with data-driven insights to make smarter agricultural decisions.".to_string(),
            },
            Highlight {
                title: "Leading AI Workshops".to_string(),
                description: "Led AI initiatives to make artificial intelligence more approachable and engaging for students, bridging the gap between theory and hands-on experience.".to_string(),
            },
        ],
        awards: vec![
            Award {
                title: "Outstanding Technical Leadership".to_string(),
                issuer: "Tech Excellence Awards".to_string(),
                year: "2023".to_string(),
            },
            Award {
                title: "Innovation in Web Development".to_string(),
                issuer: "Developer Community Choice".to_string(),
                year: "2022".to_string(),
            },
        ],
    }
}

// ============== Blog ==============

fn blog() -> CatalogConfig {
    CatalogConfig {
        categories: strings(&["Technical", "Leadership", "Ethics", "Volunteer Work"]),
        default_category: None,
        entries: vec![
            CatalogEntry {
                id: EntryId::from("1"),
                title: "The Ethics of AI: Navigating the Future of Technology".to_string(),
                category: "Ethics".to_string(),
                summary: "Exploring the ethical implications of artificial intelligence and its impact on society. As someone deeply involved in AI development, I've witnessed firsthand the challenges and opportunities this technology presents.".to_string(),
                tags: strings(&["AI", "Ethics", "Technology", "Future"]),
                image: Some("https://images.unsplash.com/photo-1677442136019-21780ecad995?auto=format&fit=crop&w=1932&q=80".to_string()),
                detail: EntryDetail::Blog(BlogDetail {
                    date: "Mar 15, 2024".to_string(),
                    read_time: "8 min".to_string(),
                    featured: true,
                    author_note: "This article stems from my experience leading AI projects and the ethical questions we faced daily.".to_string(),
                    sections: vec![
                        ArticleSection {
                            heading: "Introduction".to_string(),
                            paragraphs: strings(&["As artificial intelligence continues to advance at an unprecedented pace, we find ourselves at a crucial intersection of technology and ethics. This article explores the key ethical considerations we must address as we shape the future of AI."]),
                            bullets: Vec::new(),
                        },
                        ArticleSection {
                            heading: "The Current State of AI Ethics".to_string(),
                            paragraphs: strings(&["The rapid development of AI technologies has brought numerous ethical challenges to the forefront. From bias in machine learning algorithms to privacy concerns in data collection, the industry faces complex moral decisions."]),
                            bullets: Vec::new(),
                        },
                        ArticleSection {
                            heading: "Key Ethical Considerations".to_string(),
                            paragraphs: Vec::new(),
                            bullets: strings(&[
                                "Algorithmic Bias and Fairness",
                                "Privacy and Data Protection",
                                "Transparency and Explainability",
                                "Accountability in AI Systems",
                            ]),
                        },
                        ArticleSection {
                            heading: "Looking Ahead".to_string(),
                            paragraphs: strings(&["As we continue to develop and deploy AI systems, it's crucial that we establish robust ethical frameworks and guidelines. This requires collaboration between technologists, ethicists, policymakers, and the broader community."]),
                            bullets: Vec::new(),
                        },
                    ],
                }),
            },
            CatalogEntry {
                id: EntryId::from("2"),
                title: "Leading a Tech Club: Lessons in Growth and Community Building".to_string(),
                category: "Leadership".to_string(),
                summary: "Insights and experiences from leading a university tech community. Building a vibrant tech community taught me invaluable lessons about leadership and collaboration.".to_string(),
                tags: strings(&["Leadership", "Community", "Growth"]),
                image: Some("https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=1740&q=80".to_string()),
                detail: EntryDetail::Blog(BlogDetail {
                    date: "Mar 10, 2024".to_string(),
                    read_time: "6 min".to_string(),
                    featured: true,
                    author_note: "Leading our university tech club was a transformative experience that shaped my leadership style.".to_string(),
                    sections: Vec::new(),
                }),
            },
            CatalogEntry {
                id: EntryId::from("3"),
                title: "Building Scalable React Applications: A Deep Dive".to_string(),
                category: "Technical".to_string(),
                summary: "Technical insights and best practices for building large-scale React applications. Sharing the architectural decisions and patterns that helped our team succeed.".to_string(),
                tags: strings(&["React", "JavaScript", "Architecture"]),
                image: Some("https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?auto=format&fit=crop&w=1740&q=80".to_string()),
                detail: EntryDetail::Blog(BlogDetail {
                    date: "Mar 5, 2024".to_string(),
                    read_time: "10 min".to_string(),
                    featured: false,
                    author_note: "These insights come from years of hands-on experience with React in production environments.".to_string(),
                    sections: Vec::new(),
                }),
            },
        ],
    }
}

// ============== Projects ==============

#[allow(clippy::too_many_arguments)]
fn project(
    id: &str,
    title: &str,
    category: &str,
    summary: &str,
    image: &str,
    technologies: &[&str],
    challenges: &[&str],
    featured: bool,
) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::from(id),
        title: title.to_string(),
        category: category.to_string(),
        summary: summary.to_string(),
        tags: strings(technologies),
        image: Some(image.to_string()),
        detail: EntryDetail::Project(ProjectDetail {
            featured,
            challenges: strings(challenges),
            live_url: None,
            code_url: None,
        }),
    }
}

fn projects() -> CatalogConfig {
    CatalogConfig {
        categories: strings(&["Full Stack", "Web App", "Dashboard"]),
        default_category: None,
        entries: vec![
            project(
                "e-commerce-platform",
                "E-Commerce Platform",
                "Full Stack",
                "A modern e-commerce platform built with React and Node.js, featuring real-time inventory management, secure payment processing with Stripe, and a responsive admin dashboard. The platform supports multiple vendors, product categories, and includes an analytics system.",
                "https://images.unsplash.com/photo-1557821552-17105176677c?auto=format&fit=crop&w=1350&q=80",
                &["React", "Node.js", "Stripe", "MongoDB", "Redux", "TypeScript"],
                &[
                    "Implemented real-time inventory synchronization across multiple vendors",
                    "Optimized image loading and caching for faster page loads",
                    "Developed a scalable architecture to handle high traffic loads",
                ],
                true,
            ),
            project(
                "task-management-app",
                "Task Management App",
                "Web App",
                "A collaborative task management application with real-time updates and team collaboration features.",
                "https://images.unsplash.com/photo-1557804506-669a67965ba0?auto=format&fit=crop&w=1350&q=80",
                &["React", "Firebase", "Tailwind CSS", "Redux"],
                &[
                    "Implemented real-time updates using WebSocket",
                    "Built a drag-and-drop interface for task management",
                    "Integrated team chat and notification system",
                ],
                false,
            ),
            project(
                "weather-dashboard",
                "Weather Dashboard",
                "Dashboard",
                "A weather dashboard with interactive maps and detailed forecasts using multiple weather APIs.",
                "https://images.unsplash.com/photo-1561484930-998b6a7b22e8?auto=format&fit=crop&w=1350&q=80",
                &["React", "OpenWeather API", "Chart.js", "Mapbox"],
                &[
                    "Integrated multiple weather data sources",
                    "Built interactive weather maps",
                    "Implemented efficient data caching",
                ],
                false,
            ),
            project(
                "social-media-analytics",
                "Social Media Analytics",
                "Dashboard",
                "A comprehensive analytics dashboard for social media management and performance tracking.",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=1350&q=80",
                &["React", "D3.js", "Node.js", "PostgreSQL"],
                &[
                    "Created interactive data visualizations",
                    "Implemented real-time data processing",
                    "Built a custom reporting engine",
                ],
                false,
            ),
        ],
    }
}

// ============== Experience ==============

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    category: &str,
    role: &str,
    company: &str,
    location: &str,
    period: &str,
    achievements: &[&str],
    technologies: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::from(id),
        title: role.to_string(),
        category: category.to_string(),
        summary: achievements.first().copied().unwrap_or_default().to_string(),
        tags: strings(technologies),
        image: None,
        detail: EntryDetail::Experience(ExperienceDetail {
            company: company.to_string(),
            location: location.to_string(),
            period: period.to_string(),
            achievements: strings(achievements),
        }),
    }
}

fn experience() -> CatalogConfig {
    CatalogConfig {
        categories: strings(&["Professional", "Leadership", "Volunteer", "Awards"]),
        default_category: Some("Professional".to_string()),
        entries: vec![
            record(
                "renault-intern",
                "Professional",
                "Software Engineering Intern",
                "Renault Group Tangier",
                "Tangier, MA",
                "June 2024 - July 2024",
                &[
                    "Gained valuable insights into how digitalization of information systems enhances quality and efficiency in the industrial sector.",
                    "Contributed to the automation and analysis of quality processes by digitalizing defect collection using Demeter.",
                    "Worked on modeling dynamic KPIs using Power BI and Looker, enabling better insights for process optimization.",
                    "Participated in an applied AI project focused on the automatic detection of pedestrian crossings in the factory, refining the YOLO model to improve detection accuracy.",
                ],
                &["PowerBI", "Looker", "Python", "TensorFlow", "OpenCV"],
            ),
            record(
                "chu-ai-research",
                "Professional",
                "AI Research Intern",
                "CHU",
                "On-Site",
                "July 2024 - Present",
                &[
                    "Developed an AI-powered application to assist in diagnosing pneumonia through automated analysis of chest X-ray images using deep learning techniques.",
                    "Designed and implemented a Convolutional Neural Network (CNN) model for image classification, achieving high accuracy in detecting pneumonia presence.",
                    "Utilized Transfer Learning with pretrained models (e.g., ResNet, EfficientNet) to enhance model performance and reduce training time.",
                    "Preprocessed and augmented medical image datasets to improve generalization and model robustness.",
                    "Built a user-friendly interface for medical professionals to upload X-ray images and receive instant diagnostic predictions.",
                    "Deployed the application using Flask/Streamlit and containerized it with Docker for scalability and ease of use.",
                ],
                &["Python", "TensorFlow", "PyTorch", "OpenCV", "scikit-learn", "Flask", "Streamlit", "Docker"],
            ),
            record(
                "real-world-challenge",
                "Leadership",
                "Event Coordinator",
                "Real-World Challenge Initiative",
                "University Campus",
                "2023 - Present",
                &[
                    "Led a team of 20+ members in organizing a large-scale event focused on solving real-world challenges, promoting critical thinking and problem-solving skills for young engineers.",
                    "Coordinated logistics, sponsorships, and collaboration between different teams to ensure smooth execution of the event.",
                    "Designed and managed a **problem-solving competition**, **critical thinking workshops**, and **conferences** featuring industry professionals and experts.",
                    "Secured sponsorships and partnerships to provide valuable resources and opportunities for participants.",
                ],
                &["Event Management", "Team Leadership", "Logistics Coordination", "Sponsorship Acquisition", "Public Speaking"],
            ),
            record(
                "cs-club-ai-lead",
                "Leadership",
                "AI Section Lead",
                "Computer Science Club",
                "University Campus",
                "2022 - Present",
                &[
                    "Led the AI section of the Computer Science Club, organizing **continuous workshops** to teach students the fundamentals of artificial intelligence.",
                    "Designed structured learning sessions covering AI concepts, the **AI development process**, and key algorithms such as neural networks, decision trees, and reinforcement learning.",
                    "Developed interactive **hands-on labs**, enabling students to apply AI techniques to real-world problems.",
                    "Mentored students through practical projects, fostering an engaging and collaborative learning environment.",
                ],
                &["Artificial Intelligence", "Teaching & Mentorship", "Workshop Organization", "Machine Learning", "Hands-on Labs"],
            ),
            record(
                "debate-team-leader",
                "Leadership",
                "Debate Team Leader",
                "University Debate Society",
                "University Campus",
                "2021 - Present",
                &[
                    "Led the university's debate team, organizing **round-table discussions** and **training sessions** to enhance students' critical thinking and public speaking skills.",
                    "Developed structured **debate training programs**, covering research techniques, argument structuring, rebuttal strategies, and persuasive communication.",
                    "Organized **inter-university debate tournaments**, allowing students to refine their reasoning abilities and gain confidence in public discourse.",
                ],
                &["Public Speaking", "Critical Thinking", "Debate Coaching", "Leadership", "Event Organization"],
            ),
            record(
                "freelance-designer",
                "Volunteer",
                "Freelance Graphic Designer",
                "Local Businesses",
                "Remote",
                "2021 - Present",
                &[
                    "Designed **logos, menus, and social media pages** for small businesses to help improve their branding and online presence.",
                    "Worked closely with business owners to understand their vision and create **engaging and professional visual identities**.",
                ],
                &["Graphic Design", "Branding", "Social Media Marketing", "Adobe Photoshop", "Canva"],
            ),
            record(
                "tutor-mentor",
                "Volunteer",
                "Tutor & Mentor",
                "Community Education Initiative",
                "Local & Remote",
                "2020 - Present",
                &[
                    "Provided **academic tutoring** in math, science, and language subjects, helping students improve their performance and confidence.",
                    "Mentored younger students, guiding them through **study strategies, personal development, and career orientation**.",
                    "Created **customized learning materials** to make lessons engaging and accessible for different age groups.",
                ],
                &["Teaching", "Mentorship", "Lesson Planning", "Student Engagement"],
            ),
            record(
                "village-aid",
                "Volunteer",
                "Humanitarian Volunteer & Charity Organizer",
                "Village Aid Mission",
                "Rural & Local Communities",
                "2021 - Present",
                &[
                    "Participated in a **humanitarian trip** to build a **water well**, improving access to clean drinking water for local families.",
                    "Organized food drives and a **Ftour Basket Initiative**, providing over **100 meals** during Ramadan to families in need.",
                    "Led **seasonal clothes donation drives**, collecting, sorting, and distributing warm clothing to underprivileged communities.",
                ],
                &["Community Outreach", "Humanitarian Aid", "Fundraising", "Project Coordination"],
            ),
            record(
                "activity-center",
                "Volunteer",
                "Children's Activity Center Volunteer",
                "Local Community Center",
                "Local",
                "2021 - 2023",
                &[
                    "Organized and led **baking, art, and interactive activities** for children at a local community center.",
                    "Helped create a **fun and educational environment**, fostering creativity and teamwork among kids.",
                ],
                &["Youth Engagement", "Activity Planning", "Creative Education", "Event Coordination"],
            ),
            record(
                "top-speaker-award",
                "Awards",
                "First Place - Top Speaker Award",
                "Public Speaking Competition",
                "Morocco",
                "2023",
                &[
                    "Won **first place** in a national public speaking competition, delivering a speech on Moroccan youth and the power of solidarity.",
                    "Highlighted Morocco's resilience through key events such as the **World Cup celebrations** and the **community response to the Haouz earthquake**.",
                ],
                &["Public Speaking", "Storytelling", "Persuasive Communication"],
            ),
            record(
                "space-apps-2023",
                "Awards",
                "First Place - NASA Space Apps Challenge",
                "NASA International Hackathon",
                "Global",
                "2023",
                &[
                    "Developed an **interactive web application** using **Vue.js** with **3D visualizations** of planets and Near-Earth Objects (NEOs) using **Blender and Three.js**.",
                    "Created an **educational 2D game** with **Godot 4**, integrating interactive quizzes to enhance scientific learning.",
                    "Implemented a **Machine Learning model** using **RNN with LSTM** in **Python (TensorFlow & Keras)** to predict NEO-related events.",
                ],
                &["Vue.js", "Three.js", "Godot 4", "TensorFlow", "Keras", "Machine Learning"],
            ),
            record(
                "space-apps-2022",
                "Awards",
                "Second Place - NASA Space Apps Challenge",
                "NASA International Hackathon",
                "Global",
                "2022",
                &[
                    "Designed a **platform transforming Synthetic Aperture Radar (SAR) imagery** into artistic works, promoting the beauty within scientific data.",
                    "Utilized **SNAP software** for **radar image preprocessing** to convert radar imagery into unique artistic creations.",
                ],
                &["SNAP Software", "Radar Imagery Processing"],
            ),
            record(
                "nexus-forum",
                "Awards",
                "Third Place - Nexus Forum Hackathon",
                "Nexus Forum",
                "Morocco",
                "2023",
                &[
                    "Developed **EcoCrops**, a digital platform promoting sustainable agriculture through AI-driven recommendations and interactive dashboards.",
                    "Designed a system allowing farmers to **plan crops efficiently, monitor growth through dashboards, and optimize yields while reducing waste**.",
                ],
                &["AI for Agriculture", "Data Visualization", "Dashboard Development"],
            ),
        ],
    }
}

// ============== Skills ==============

fn group(name: &str, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        name: name.to_string(),
        skills: strings(skills),
    }
}

fn skills() -> Skills {
    Skills {
        groups: vec![
            group("Programming Languages", &["Java", "Python", "JavaScript", "TypeScript", "C", "C++", "C#", "SQL"]),
            group("Frontend", &["React", "Next.js", "Vue.js", "Tailwind CSS", "Bootstrap"]),
            group("Backend & Frameworks", &["Spring Boot", "Spring Cloud", "Flask", "Node.js", "REST APIs", "GraphQL", "Microservices"]),
            group("DevOps & Tools", &["GitHub Actions", "Jenkins", "Docker", "Kubernetes"]),
            group("Databases", &["PostgreSQL", "MySQL", "Oracle SQL", "MongoDB"]),
            group("Testing & QA", &["JUnit", "Selenium"]),
            group("Machine Learning & Data Science", &["TensorFlow", "Scikit-learn", "OpenCV", "Pandas", "NumPy", "Data Preprocessing"]),
            group("Data Analytics", &["Power BI", "Looker"]),
            group("UI/UX & Design", &["Figma", "Adobe Illustrator", "Canva", "Wireframing"]),
            group("Virtualization", &["VMware", "VirtualBox", "Network Configuration"]),
        ],
        certifications: vec![
            Certification {
                name: "AWS Certified Developer".to_string(),
                issuer: "Amazon Web Services".to_string(),
                year: "2024".to_string(),
            },
            Certification {
                name: "Professional Web Developer".to_string(),
                issuer: "Google".to_string(),
                year: "2023".to_string(),
            },
        ],
    }
}
