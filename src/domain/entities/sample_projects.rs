//! Fixed demo catalog inserted by `POST /api/projects/sample`.

use crate::entities::project::ProjectCreate;

const UNSPLASH_PARAMS: &str = "?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1000&q=80";

struct SampleSeed {
    title: &'static str,
    description: &'static str,
    tech_stack: [&'static str; 5],
    photo: &'static str,
    demo_url: &'static str,
    github_url: &'static str,
    category: &'static str,
    featured: bool,
}

const SAMPLES: [SampleSeed; 6] = [
    SampleSeed {
        title: "AI-Powered Chat Application",
        description: "A modern chat application with AI integration, real-time messaging, and beautiful UI. Features include smart responses, conversation history, and responsive design.",
        tech_stack: ["React", "Node.js", "OpenAI", "Socket.io", "MongoDB"],
        photo: "photo-1587620962725-abab7fe55159",
        demo_url: "https://demo-chat.example.com",
        github_url: "https://github.com/user/ai-chat",
        category: "Web Application",
        featured: true,
    },
    SampleSeed {
        title: "3D Portfolio Website",
        description: "An interactive 3D portfolio showcasing projects with geometric shapes and smooth animations. Built with Three.js and React for an immersive user experience.",
        tech_stack: ["React", "Three.js", "React Three Fiber", "FastAPI", "MongoDB"],
        photo: "photo-1633356122544-f134324a6cee",
        demo_url: "https://portfolio-3d.example.com",
        github_url: "https://github.com/user/3d-portfolio",
        category: "Portfolio",
        featured: true,
    },
    SampleSeed {
        title: "E-commerce Platform",
        description: "Full-stack e-commerce solution with payment integration, inventory management, and admin dashboard. Features modern design and seamless user experience.",
        tech_stack: ["React", "Express.js", "Stripe", "PostgreSQL", "Redis"],
        photo: "photo-1556742049-0cfed4f6a45d",
        demo_url: "https://shop.example.com",
        github_url: "https://github.com/user/ecommerce",
        category: "E-commerce",
        featured: false,
    },
    SampleSeed {
        title: "Data Visualization Dashboard",
        description: "Interactive dashboard for data analytics with charts, graphs, and real-time updates. Perfect for business intelligence and data-driven decisions.",
        tech_stack: ["React", "D3.js", "Python", "FastAPI", "PostgreSQL"],
        photo: "photo-1551288049-bebda4e38f71",
        demo_url: "https://dashboard.example.com",
        github_url: "https://github.com/user/dashboard",
        category: "Data Analytics",
        featured: true,
    },
    SampleSeed {
        title: "Mobile Game Development",
        description: "Engaging mobile game with 3D graphics, physics simulation, and multiplayer capabilities. Optimized for performance across all devices.",
        tech_stack: ["Unity", "C#", "Firebase", "Photon", "Blender"],
        photo: "photo-1493711662062-fa541adb3fc8",
        demo_url: "https://play.google.com/store/apps/details?id=com.example.game",
        github_url: "https://github.com/user/mobile-game",
        category: "Game Development",
        featured: false,
    },
    SampleSeed {
        title: "Blockchain DeFi Platform",
        description: "Decentralized finance platform with smart contracts, yield farming, and token swapping. Built on Ethereum with modern web3 integration.",
        tech_stack: ["Solidity", "React", "Web3.js", "Hardhat", "IPFS"],
        photo: "photo-1639762681485-074b7f938ba0",
        demo_url: "https://defi.example.com",
        github_url: "https://github.com/user/defi-platform",
        category: "Blockchain",
        featured: true,
    },
];

/// Create shapes for the six demo projects, in display order.
pub fn sample_projects() -> Vec<ProjectCreate> {
    SAMPLES
        .iter()
        .map(|seed| ProjectCreate {
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            tech_stack: seed.tech_stack.iter().map(|t| t.to_string()).collect(),
            image_url: format!("https://images.unsplash.com/{}{}", seed.photo, UNSPLASH_PARAMS),
            demo_url: Some(seed.demo_url.to_string()),
            github_url: Some(seed.github_url.to_string()),
            category: seed.category.to_string(),
            featured: seed.featured,
        })
        .collect()
}
