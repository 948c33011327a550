use super::{Education, Experience, Localized, Project, ProjectCategory, Skill, SkillCategory};

pub static EXPERIENCE: &[Experience] = &[
    Experience {
        id: "consulting",
        title: Localized { fr: "Consultant technique SAP senior", en: "Senior SAP Technical Consultant" },
        company: "EBMC",
        period: Localized { fr: "2023 - aujourd'hui", en: "2023 - present" },
        location: "Luxembourg",
        description: Localized {
            fr: "Développements ABAP-OO, applications Fiori/UI5 et services OData pour des clients industriels.",
            en: "ABAP-OO development, Fiori/UI5 apps and OData services for industrial clients.",
        },
        tags: &["ABAP", "Fiori", "OData", "CDS"],
        is_current: true,
    },
    Experience {
        id: "integration",
        title: Localized { fr: "Développeur SAP", en: "SAP Developer" },
        company: "Ekenz",
        period: Localized { fr: "2019 - 2023", en: "2019 - 2023" },
        location: "Metz, France",
        description: Localized {
            fr: "Interfaces IDoc/RFC, formulaires Adobe et optimisation de programmes spécifiques.",
            en: "IDoc/RFC interfaces, Adobe forms and tuning of custom programs.",
        },
        tags: &["IDoc", "RFC", "Adobe Forms"],
        is_current: false,
    },
    Experience {
        id: "freelance",
        title: Localized { fr: "Développeur full-stack indépendant", en: "Freelance Full-Stack Developer" },
        company: "Freelance",
        period: Localized { fr: "2015 - 2019", en: "2015 - 2019" },
        location: "Thionville, France",
        description: Localized {
            fr: "Sites web et automatisations pour des petites entreprises.",
            en: "Websites and automations for small businesses.",
        },
        tags: &["React", "Node.js", "Make.com"],
        is_current: false,
    },
];

pub static EDUCATION: &[Education] = &[
    Education {
        id: "school42",
        school: "École 42",
        degree: Localized { fr: "Cursus développement logiciel", en: "Software engineering curriculum" },
        period: "2021 - 2023",
        highlight: true,
    },
    Education {
        id: "iut",
        school: "IUT de Metz",
        degree: Localized { fr: "DUT Informatique", en: "Associate degree in Computer Science" },
        period: "2010 - 2012",
        highlight: false,
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        id: "sap",
        title: Localized { fr: "SAP", en: "SAP" },
        skills: &[
            Skill { name: "ABAP / ABAP-OO", level: 95 },
            Skill { name: "SAP Fiori / UI5", level: 90 },
            Skill { name: "CDS / OData", level: 88 },
            Skill { name: "BAPI / RFC / IDoc", level: 92 },
        ],
    },
    SkillCategory {
        id: "frontend",
        title: Localized { fr: "Frontend", en: "Frontend" },
        skills: &[
            Skill { name: "React / Next.js", level: 88 },
            Skill { name: "TypeScript", level: 82 },
            Skill { name: "Tailwind CSS", level: 90 },
        ],
    },
    SkillCategory {
        id: "backend",
        title: Localized { fr: "Backend", en: "Backend" },
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Python", level: 72 },
            Skill { name: "SQL", level: 88 },
        ],
    },
    SkillCategory {
        id: "automation",
        title: Localized { fr: "Automatisation", en: "Automation" },
        skills: &[
            Skill { name: "Make.com", level: 92 },
            Skill { name: "Home Assistant", level: 88 },
            Skill { name: "Docker", level: 82 },
        ],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "portfolio",
        title: "Portfolio",
        description: Localized {
            fr: "Ce site : page unique bilingue avec formulaire de contact protégé.",
            en: "This site: a bilingual single page with a protected contact form.",
        },
        url: None,
        github: Some("https://github.com/portfolio/site"),
        tags: &["Rust", "Leptos", "WASM"],
        category: ProjectCategory::Web,
    },
    Project {
        id: "amap",
        title: "AMAP",
        description: Localized {
            fr: "Gestion des paniers pour une association de producteurs locaux.",
            en: "Basket management for a local farmers' association.",
        },
        url: Some("https://amap.example.org"),
        github: None,
        tags: &["React", "Node.js"],
        category: ProjectCategory::Web,
    },
    Project {
        id: "raytracing",
        title: "miniRT",
        description: Localized {
            fr: "Moteur de lancer de rayons en C.",
            en: "Ray tracing engine written in C.",
        },
        url: None,
        github: Some("https://github.com/portfolio/minirt"),
        tags: &["C", "Graphics"],
        category: ProjectCategory::School,
    },
    Project {
        id: "libasm",
        title: "libasm",
        description: Localized {
            fr: "Réimplémentation de fonctions libc en assembleur.",
            en: "libc functions reimplemented in assembly.",
        },
        url: None,
        github: Some("https://github.com/portfolio/libasm"),
        tags: &["Assembly", "x86-64"],
        category: ProjectCategory::School,
    },
    Project {
        id: "homeassistant",
        title: "Home Assistant",
        description: Localized {
            fr: "Domotique complète : capteurs, scènes et tableaux de bord.",
            en: "Whole-home automation: sensors, scenes and dashboards.",
        },
        url: None,
        github: None,
        tags: &["YAML", "Automation"],
        category: ProjectCategory::Personal,
    },
];
