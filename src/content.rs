pub const OWNER_NAME: &str = "Rahul Gupta";
pub const HERO_HEADING: &str = "Hi, I'm Rahul Gupta 👋";
pub const HERO_TAGLINE: &str = "AI/ML Engineer · Startup Enthusiast · Lifelong Learner";
pub const HERO_BIO: &str = "Driven to democratize education through AI. I hold a B.E. in Computer Science & Engineering (AI & ML) from the University of Mumbai.";
pub const PROFILE_PHOTO_SRC: &str = "/my_image.jpeg";
pub const PROFILE_PHOTO_SIZE: u32 = 144;

pub const SKILLS_HEADING: &str = "Technical Skills";
pub const PROJECTS_HEADING: &str = "Key Projects";
pub const CONTACT_HEADING: &str = "Get in Touch";
pub const CONTACT_BLURB: &str = "Open to collaborations on AI/edtech startups. Let's build something impactful! 🚀";
pub const CONTACT_EMAIL_HREF: &str = "mailto:rahulgupta190310587044@gmail.com";
pub const FOOTER_LINE: &str = "© 2025 Rahul Gupta. All rights reserved.";

#[derive(Clone, Copy, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, PartialEq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        target: "#about",
    },
    NavLink {
        label: "Skills",
        target: "#skills",
    },
    NavLink {
        label: "Projects",
        target: "#projects",
    },
    NavLink {
        label: "Contact",
        target: "#contact",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Planet-Earth1234/Planet-Earth1234/blob/main/README.md",
        icon: "🤖",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/rahul-g-28333427b/",
        icon: "💼",
    },
    SocialLink {
        label: "Email",
        href: "mailto:rahulgupta190310587044@gmail.com",
        icon: "✉️",
    },
];

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        title: "Languages",
        icon: "🔤",
        items: &["Python", "JavaScript", "SQL", "HTML", "CSS"],
    },
    SkillCategory {
        title: "AI/ML",
        icon: "🤖",
        items: &["PyTorch", "TensorFlow", "Transformers", "BERT", "LoRA/QLoRA"],
    },
    SkillCategory {
        title: "Computer Vision",
        icon: "👁️",
        items: &["OpenCV", "YOLOv8", "Object Detection", "OCR"],
    },
    SkillCategory {
        title: "Tools",
        icon: "⚡",
        items: &["Docker", "Git", "Flask", "Linux", "Hugging Face"],
    },
];

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "AI Math Tutor",
        description: "Web-based tutoring platform using YOLOv8, OCR, Flask, and LLaMA for real-time responses.",
        link: "https://github.com/Planet-Earth1234/Ai_math_tutor",
        icon: "🧮",
    },
    Project {
        title: "NLP Fine-tuning",
        description: "Fine-tuned BERT and mBART models with LoRA/QLoRA, reducing training time by 60%.",
        link: "https://github.com/Planet-Earth1234/Ai_math_tutor/blob/main/Customer_issue.ipynb",
        icon: "📊",
    },
    Project {
        title: "Food Classifier",
        description: "Fine-tuned EfficientNet model for Indian food classification, deployed via Docker.",
        link: "https://github.com/Planet-Earth1234/Food-Decoder",
        icon: "🍛",
    },
    Project {
        title: "ECHO TWEET",
        description: "Bird audio classification using PyTorch and Librosa, achieving 85% accuracy.",
        link: "https://github.com/Planet-Earth1234/ECHO-TWEET",
        icon: "🐦",
    },
];
