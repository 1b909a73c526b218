//! Static portfolio content rendered by the window panels

// ============================================================================
// Profile
// ============================================================================

pub const OWNER_NAME: &str = "João Bosco";
pub const MENU_BAR_TITLE: &str = "João Bosco - Portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub initials: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub stats: &'static [ProfileStat],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PROFILE: Profile = Profile {
    initials: "JB",
    name: OWNER_NAME,
    role: "Desenvolvedor de Software Sênior",
    bio: "Sou desenvolvedor sênior com 7+ anos de experiência em microsserviços, APIs e soluções escaláveis. \
          Apaixonado por tecnologia, boas práticas e mentoria de times.",
    stats: &[
        ProfileStat {
            value: "29 anos",
            label: "Idade",
        },
        ProfileStat {
            value: "7+ anos",
            label: "Experiência",
        },
    ],
};

// ============================================================================
// Experience
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub period: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "MetaBank",
        period: "2022 - Atual",
        role: "Senior Software Developer",
        description: "Desenvolvimento de microsserviços e APIs escaláveis",
        icon: "🏦",
    },
    Experience {
        company: "Localiza",
        period: "2019 - 2022",
        role: "Software Developer",
        description: "Soluções para gestão de frotas e locação",
        icon: "🚗",
    },
    Experience {
        company: "Walmart",
        period: "2018 - 2019",
        role: "Junior Developer",
        description: "Sistemas de e-commerce e logística",
        icon: "🛒",
    },
];

// ============================================================================
// Projects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProduction,
    Completed,
    InDevelopment,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::InProduction => "Em produção",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::InDevelopment => "Em desenvolvimento",
        }
    }

    /// (background, text, border) colors of the status badge
    pub fn badge_colors(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            ProjectStatus::InProduction => ("#14532d", "#86efac", "#15803d"),
            ProjectStatus::Completed => ("#1e3a8a", "#93c5fd", "#1d4ed8"),
            ProjectStatus::InDevelopment => ("#713f12", "#fde047", "#a16207"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Plataforma de Microsserviços Bancários",
        description: "Arquitetura distribuída para processamento de transações financeiras com alta disponibilidade",
        tech: &["Java", "Spring Boot", "Kafka", "Redis", "PostgreSQL", "Docker", "Kubernetes"],
        status: ProjectStatus::InProduction,
    },
    Project {
        name: "API Gateway Enterprise",
        description: "Gateway centralizado com rate limiting, autenticação JWT e monitoramento avançado",
        tech: &[".NET Core", "Redis", "MongoDB", "Prometheus", "Grafana"],
        status: ProjectStatus::InProduction,
    },
    Project {
        name: "Sistema de Event Sourcing",
        description: "Implementação de CQRS e Event Sourcing para auditoria e rastreabilidade completa",
        tech: &["Node.js", "EventStore", "RabbitMQ", "TypeScript"],
        status: ProjectStatus::Completed,
    },
    Project {
        name: "Pipeline CI/CD Avançado",
        description: "Automação completa com testes, segurança, deploy blue-green e rollback automático",
        tech: &["Jenkins", "Docker", "Terraform", "AWS", "SonarQube"],
        status: ProjectStatus::InProduction,
    },
    Project {
        name: "Sistema de Machine Learning",
        description: "Plataforma para análise preditiva de fraudes em tempo real com MLOps",
        tech: &["Python", "TensorFlow", "Kubernetes", "Apache Spark", "MLflow"],
        status: ProjectStatus::InDevelopment,
    },
    Project {
        name: "Arquitetura Serverless",
        description: "Migração de monolito para arquitetura serverless com redução de 60% nos custos",
        tech: &["AWS Lambda", "API Gateway", "DynamoDB", "CloudFormation"],
        status: ProjectStatus::Completed,
    },
    Project {
        name: "Sistema de Observabilidade",
        description: "Stack completa de monitoramento, logging e tracing distribuído",
        tech: &["Elasticsearch", "Kibana", "Jaeger", "Prometheus", "Grafana"],
        status: ProjectStatus::InProduction,
    },
];

// ============================================================================
// Contact
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Shortened URL shown under the label
    pub display: &'static str,
    pub icon: &'static str,
    pub icon_bg: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/joao-bosco-7412a4227/?trk=opento_sprofile_topcard",
        display: "linkedin.com/in/joao-bosco-7412a4227",
        icon: "💼",
        icon_bg: "#1d4ed8",
    },
    ContactLink {
        label: "GitHub",
        href: "https://github.com/JoaoBoscoD",
        display: "github.com/JoaoBoscoD",
        icon: "💻",
        icon_bg: "#1f2937",
    },
];

pub const AVAILABILITY_NOTE: &str = "Disponível para novas oportunidades e projetos desafiadores!";

pub const UNKNOWN_CONTENT_MESSAGE: &str = "Conteúdo não encontrado";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_statuses_have_portuguese_labels() {
        let labels: Vec<_> = PROJECTS.iter().map(|p| p.status.label()).collect();
        assert_eq!(labels.iter().filter(|l| **l == "Em produção").count(), 4);
        assert_eq!(labels.iter().filter(|l| **l == "Concluído").count(), 2);
        assert_eq!(labels.iter().filter(|l| **l == "Em desenvolvimento").count(), 1);
    }

    #[test]
    fn contact_links_are_absolute_https() {
        assert_eq!(CONTACT_LINKS.len(), 2);
        assert!(CONTACT_LINKS.iter().all(|link| link.href.starts_with("https://")));
    }

    #[test]
    fn experiences_are_newest_first() {
        let companies: Vec<_> = EXPERIENCES.iter().map(|e| e.company).collect();
        assert_eq!(companies, ["MetaBank", "Localiza", "Walmart"]);
    }
}
