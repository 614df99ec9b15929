use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatKind {
    Phishing,
    Malware,
    SqlInjection,
    Dos,
    Xss,
    Mitm,
    ZeroDay,
    Rootkit,
    Ransomware,
    SocialEngineering,
    WeakAuthentication,
    InsiderThreat,
}

/// Static description of a threat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub attack_message: &'static str,
    pub base_health: u32,
    pub base_damage: u32,
}

impl ThreatKind {
    pub const ALL: [ThreatKind; 12] = [
        ThreatKind::Phishing,
        ThreatKind::Malware,
        ThreatKind::SqlInjection,
        ThreatKind::Dos,
        ThreatKind::Xss,
        ThreatKind::Mitm,
        ThreatKind::ZeroDay,
        ThreatKind::Rootkit,
        ThreatKind::Ransomware,
        ThreatKind::SocialEngineering,
        ThreatKind::WeakAuthentication,
        ThreatKind::InsiderThreat,
    ];

    /// High-severity categories eligible to appear as bosses.
    pub const BOSSES: [ThreatKind; 3] = [
        ThreatKind::ZeroDay,
        ThreatKind::Ransomware,
        ThreatKind::Rootkit,
    ];

    pub fn profile(&self) -> ThreatProfile {
        let (name, description, attack_message, base_health, base_damage) = match self {
            ThreatKind::Phishing => (
                "Phishing Email",
                "A deceptive attempt to steal sensitive information by masquerading as a trusted entity.",
                "attempts to steal credentials",
                60,
                12,
            ),
            ThreatKind::Malware => (
                "Malware",
                "Malicious software designed to corrupt files and steal data silently.",
                "executes malicious code",
                70,
                13,
            ),
            ThreatKind::SqlInjection => (
                "SQL Injection",
                "An attack that attempts to manipulate your database by injecting malicious SQL code.",
                "injects malicious SQL commands",
                65,
                13,
            ),
            ThreatKind::Dos => (
                "DoS Attack",
                "Denial of Service attack that overwhelms your system with traffic.",
                "floods the network",
                100,
                15,
            ),
            ThreatKind::Xss => (
                "Cross-Site Script",
                "Malicious script that hijacks user sessions and steals cookies.",
                "injects malicious scripts",
                65,
                13,
            ),
            ThreatKind::Mitm => (
                "Man in the Middle",
                "Secretly intercepts and alters communications between systems.",
                "intercepts network traffic",
                75,
                14,
            ),
            ThreatKind::ZeroDay => (
                "Zero Day Exploit",
                "A previously unknown vulnerability that leaves your system exposed.",
                "exploits unknown vulnerability",
                100,
                12,
            ),
            ThreatKind::Rootkit => (
                "Rootkit",
                "Advanced malware that hides deep in your system to maintain unauthorized access.",
                "attempts to gain root access",
                80,
                15,
            ),
            ThreatKind::Ransomware => (
                "Ransomware",
                "Malicious software that encrypts your files and demands payment.",
                "starts encrypting files",
                100,
                15,
            ),
            ThreatKind::SocialEngineering => (
                "Social Engineering",
                "Psychological manipulation techniques to trick users into security mistakes.",
                "attempts social manipulation",
                50,
                13,
            ),
            ThreatKind::WeakAuthentication => (
                "Weak Authentication",
                "Exploits weak passwords and authentication mechanisms.",
                "attempts password cracking",
                55,
                12,
            ),
            ThreatKind::InsiderThreat => (
                "Insider Threat",
                "A privileged user attempting to misuse their access.",
                "misuses system access",
                85,
                14,
            ),
        };
        ThreatProfile {
            name,
            description,
            attack_message,
            base_health,
            base_damage,
        }
    }
}

/// An adversary for a single encounter. Discarded when the encounter ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threat {
    pub name: String,
    pub max_health: u32,
    pub health: u32,
    pub damage: u32,
    pub experience_value: u32,
    pub kind: ThreatKind,
    pub boss: bool,
}

impl Threat {
    pub fn new(
        name: impl Into<String>,
        health: u32,
        damage: u32,
        experience_value: u32,
        kind: ThreatKind,
    ) -> Self {
        Self {
            name: name.into(),
            max_health: health,
            health,
            damage,
            experience_value,
            kind,
            boss: false,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Returns the damage actually absorbed (health bottoms out at zero).
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.health);
        self.health -= taken;
        taken
    }

    pub fn attack_message(&self) -> &'static str {
        self.kind.profile().attack_message
    }

    pub fn report(&self) -> ThreatReport {
        ThreatReport {
            name: self.name.clone(),
            health: self.health,
            max_health: self.max_health,
            damage: self.damage,
            description: self.kind.profile().description.to_string(),
            attack_message: self.attack_message().to_string(),
            boss: self.boss,
        }
    }
}

/// Read-only snapshot shown by the Inspect action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatReport {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub damage: u32,
    pub description: String,
    pub attack_message: String,
    pub boss: bool,
}
