//! Landing page content.
//!
//! All copy is static. Repeated blocks are declared as descriptor arrays and
//! expanded by the renderer.

use lp_assets::ImageAsset;
use lp_sections::{
    Accent, ActionCard, ActionGrid, BusinessBenefits, Button, ButtonStyle, CardGrid, Footer, Hero,
    IconCard, IconLabel, LinkColumn, LinkDescriptor, LogoStrip, MediaSide, NavBar, Section,
    SplitBlock, TrustBlock,
};

pub(crate) const TITLE: &str = "Make.com 网站复刻";
pub(crate) const DESCRIPTION: &str =
    "Make 是一个可视化平台，任何人都可以通过它设计、构建和自动化任何事物";
pub(crate) const LANG: &str = "zh-CN";

const PLATFORM_PITCH: &str = "Make 是一个可视化平台，任何人都可以通过它设计、构建和自动化任何事物——从任务和工作流到应用程序和系统。";
const LEARN_MORE: &str = "了解更多";
const START_FREE: &str = "免费开始";

/// Number of customer logos in the logo strip.
pub(crate) const CUSTOMER_LOGO_COUNT: usize = 10;

const NAV_LINKS: [LinkDescriptor; 5] = [
    LinkDescriptor::new("解决方案", "#"),
    LinkDescriptor::new("平台", "#"),
    LinkDescriptor::new("定价", "#"),
    LinkDescriptor::new("资源", "#"),
    LinkDescriptor::new("公司", "#"),
];

const FEATURE_CARDS: [IconCard; 3] = [
    IconCard {
        icon: "💡",
        accent: Accent::Blue,
        title: "可视化工作流构建器",
        text: "拖放即可创建强大的集成和自动化。",
    },
    IconCard {
        icon: "🚀",
        accent: Accent::Purple,
        title: "AI 驱动的自动化",
        text: "利用 AI 增强您的工作流并做出更明智的决策。",
    },
    IconCard {
        icon: "🔗",
        accent: Accent::Green,
        title: "连接一切",
        text: "与数千个应用程序和服务集成。",
    },
];

const BENEFITS: [&str; 4] = [
    "通过可视化工作流简化操作。",
    "自动化重复性任务以节省时间和资源。",
    "连接不同的系统以实现无缝数据流。",
    "赋能非技术用户构建解决方案。",
];

const DEPARTMENTS: [IconLabel; 6] = [
    IconLabel { icon: "⚙️", label: "运营" },
    IconLabel { icon: "📊", label: "营销" },
    IconLabel { icon: "💰", label: "财务" },
    IconLabel { icon: "📞", label: "销售" },
    IconLabel { icon: "👩‍💻", label: "IT" },
    IconLabel { icon: "🤝", label: "人力资源" },
];

const AI_CARDS: [ActionCard; 3] = [
    ActionCard {
        title: "AI 驱动的数据处理",
        text: "利用智能 AI 自动化数据提取、转换和加载。",
        action: LEARN_MORE,
    },
    ActionCard {
        title: "智能决策",
        text: "利用 AI 在您的自动化工作流中做出实时决策。",
        action: LEARN_MORE,
    },
    ActionCard {
        title: "内容生成与摘要",
        text: "通过 AI 自动化内容创建和摘要任务。",
        action: LEARN_MORE,
    },
];

const TRUST_FEATURES: [IconCard; 3] = [
    IconCard {
        icon: "🔒",
        accent: Accent::Blue,
        title: "数据加密",
        text: "您的数据通过行业领先的加密技术得到保护。",
    },
    IconCard {
        icon: "🛡️",
        accent: Accent::Red,
        title: "合规标准",
        text: "遵守全球合规法规。",
    },
    IconCard {
        icon: "✅",
        accent: Accent::Green,
        title: "定期审计",
        text: "持续的安全审计和更新。",
    },
];

const SOCIAL_LINKS: [LinkDescriptor; 3] = [
    LinkDescriptor::new("F", "#"),
    LinkDescriptor::new("T", "#"),
    LinkDescriptor::new("L", "#"),
];

const LANGUAGES: [&str; 2] = ["English", "中文"];

fn column(title: &'static str, links: &[(&'static str, &'static str)]) -> LinkColumn {
    LinkColumn {
        title,
        links: links
            .iter()
            .map(|&(label, target_url)| LinkDescriptor::new(label, target_url))
            .collect(),
    }
}

fn footer_columns() -> Vec<LinkColumn> {
    vec![
        column(
            "解决方案",
            &[
                ("面向营销", "#"),
                ("面向销售", "#"),
                ("面向 IT", "#"),
                ("面向人力资源", "#"),
                ("面向财务", "#"),
            ],
        ),
        column(
            "公司",
            &[
                ("关于我们", "#"),
                ("职业", "#"),
                ("新闻", "#"),
                ("合作伙伴", "#"),
            ],
        ),
        column(
            "资源",
            &[
                ("博客", "#"),
                ("案例研究", "#"),
                ("帮助中心", "#"),
                ("社区", "#"),
            ],
        ),
        column(
            "法律",
            &[
                ("服务条款", "#"),
                ("隐私政策", "#"),
                ("Cookie 政策", "#"),
            ],
        ),
    ]
}

fn customer_logos() -> Vec<ImageAsset> {
    (1..=CUSTOMER_LOGO_COUNT)
        .map(|i| {
            ImageAsset::new(
                format!("customer-logo-{i}"),
                format!("/img/customer-logo-{i}.png"),
                "客户标志",
            )
        })
        .collect()
}

/// Build the page's sections in document order with fresh assets.
pub(crate) fn sections() -> Vec<Section> {
    vec![
        Section::Nav(NavBar {
            brand: "Make.",
            links: NAV_LINKS.to_vec(),
            login: Button::new("登录", ButtonStyle::Login),
            cta: Button::new(START_FREE, ButtonStyle::Cta),
        }),
        Section::Hero(Hero {
            title_lines: vec!["您能看到并", "理解的自动化。"],
            subtitle: PLATFORM_PITCH,
            actions: vec![
                Button::new(START_FREE, ButtonStyle::Primary),
                Button::new("预约演示", ButtonStyle::Secondary),
            ],
            image: ImageAsset::new("hero", "/img/hero-automation.png", "AI 自动化图形"),
        }),
        Section::FeatureGrid(CardGrid {
            title: "使用 Make + AI 展望核心生产未来",
            subtitle: PLATFORM_PITCH,
            cards: FEATURE_CARDS.to_vec(),
        }),
        Section::BusinessBenefits(BusinessBenefits {
            split: SplitBlock {
                title: "加速您业务的创新",
                subtitle: "Make 赋能团队无限构建和自动化，促进创新和效率。",
                bullets: BENEFITS.to_vec(),
                action: None,
                image: ImageAsset::new(
                    "business-automation",
                    "/img/business-automation.png",
                    "业务自动化桌面",
                ),
                image_side: MediaSide::Right,
            },
            departments: DEPARTMENTS.to_vec(),
        }),
        Section::AiCapabilities(ActionGrid {
            title: "释放 AI 自动化的全部潜力",
            subtitle: "探索 Make 的 AI 功能如何彻底改变您的工作流并带来前所未有的效率。",
            cards: AI_CARDS.to_vec(),
        }),
        Section::AudienceSegments(SplitBlock {
            title: "为每个团队提供自动化",
            subtitle: "无论您身处营销、销售、IT 还是人力资源，Make 都提供量身定制的解决方案，以自动化您团队的独特工作流。",
            bullets: Vec::new(),
            action: Some(Button::new("探索解决方案", ButtonStyle::Purple)),
            image: ImageAsset::new("team-automation", "/img/team-automation.png", "团队自动化图形"),
            image_side: MediaSide::Right,
        }),
        Section::AiPotential(SplitBlock {
            title: "释放 AI 的全部潜力",
            subtitle: "将 AI 集成到您的核心业务流程中，以大规模推动创新和效率。",
            bullets: Vec::new(),
            action: Some(Button::new(LEARN_MORE, ButtonStyle::Purple)),
            image: ImageAsset::new(
                "ai-interconnected",
                "/img/ai-interconnected.png",
                "互联的 AI 图标",
            ),
            image_side: MediaSide::Left,
        }),
        Section::TrustCompliance(TrustBlock {
            features: TRUST_FEATURES.to_vec(),
            title: "值得信赖的安全与合规",
            subtitle: "Make 以安全为核心构建，确保您的数据和操作始终受到保护。",
            action: Button::new(LEARN_MORE, ButtonStyle::Purple),
        }),
        Section::CustomerLogos(LogoStrip {
            title: "加入数千家通过 Make 实现转型的企业",
            logos: customer_logos(),
        }),
        Section::Footer(Footer {
            title: "充分发挥您的业务潜力",
            email_placeholder: "输入您的邮箱",
            submit: Button::new(START_FREE, ButtonStyle::Green),
            columns: footer_columns(),
            social_title: "关注我们",
            social_links: SOCIAL_LINKS.to_vec(),
            languages: LANGUAGES.to_vec(),
            copyright: "© 2025 Make. 版权所有。",
        }),
    ]
}
