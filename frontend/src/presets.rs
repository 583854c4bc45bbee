use crate::config::{Contact, Practice, Section, SiteConfig};
use crate::content::{
    FaqEntry, GalleryImage, Icon, Modality, NavLink, PageContent, Pinned, Specialty, Stat,
    Testimonial,
};

const PORTRAIT_URL: &str = "https://res.cloudinary.com/dxhlvrach/image/upload/v1764693611/Imagem_do_WhatsApp_de_2025-12-02_%C3%A0_s_12.30.44_fab2f298_fthmf3.jpg";
const ABOUT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1544717305-2782549b5136?q=80&w=1000&auto=format&fit=crop";
const ONLINE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1573497620053-ea5300f94f21?q=80&w=1000&auto=format&fit=crop";

fn s(text: &str) -> String {
    text.to_string()
}

fn link(label: &str, target: &str) -> NavLink {
    NavLink {
        label: s(label),
        target: s(target),
    }
}

fn image(url: &str, alt: &str) -> GalleryImage {
    GalleryImage {
        url: s(url),
        alt: s(alt),
    }
}

fn practice() -> Practice {
    Practice {
        first_name: s("Ane de"),
        last_name: s("Souza"),
        title: s("Psicóloga Clínica"),
        registration: s("CRP 06/00000"),
        tagline: s("\"Cuidar da mente é um ato de coragem.\""),
        approach: s("Humanista"),
        portrait_url: s(PORTRAIT_URL),
        about_image_url: s(ABOUT_IMAGE_URL),
        bio: vec![
            s("Olá, sou Ane de Souza. Psicóloga clínica apaixonada pelo potencial humano de transformação. Minha atuação é pautada na Abordagem Centrada na Pessoa, onde acredito que todo indivíduo possui os recursos necessários para o seu próprio crescimento."),
            s("Ofereço psicoterapia tanto online quanto presencial, criando um espaço de escuta ativa e empática, livre de julgamentos. Meu objetivo é caminhar ao seu lado na busca por autoconhecimento e bem-estar."),
        ],
        footer_blurb: s("Ajudando você a encontrar sua melhor versão através do autoconhecimento."),
    }
}

fn stats() -> Vec<Stat> {
    vec![
        Stat {
            label: s("Anos de Experiência"),
            value: 8,
            suffix: s("+"),
        },
        Stat {
            label: s("Vidas Transformadas"),
            value: 500,
            suffix: s("+"),
        },
    ]
}

fn specialties() -> Vec<Specialty> {
    vec![
        Specialty {
            icon: Icon::Heart,
            title: s("Psicoterapia"),
            description: s("Atendimento clínico online e presencial focado no seu bem-estar."),
        },
        Specialty {
            icon: Icon::Users,
            title: s("Público Alvo"),
            description: s("Acolhimento especializado para Adultos, Adolescentes e Casais."),
        },
        Specialty {
            icon: Icon::MessageCircle,
            title: s("Roda de Conversa"),
            description: s("Facilitadora de grupos terapêuticos e conversas entre mulheres."),
        },
        Specialty {
            icon: Icon::GraduationCap,
            title: s("Supervisão"),
            description: s("Orientação clínica para estudantes e recém-formados em ACP."),
        },
    ]
}

fn formation() -> Vec<String> {
    vec![
        s("Psicologia Organizacional"),
        s("Neuropsicologia"),
        s("ACP"),
        s("Psicologia do Trânsito (cursando)"),
    ]
}

fn modalities() -> Vec<Modality> {
    vec![
        Modality {
            icon: Icon::MapPin,
            title: s("Presencial"),
            description: s("Um ambiente acolhedor, preparado para garantir sua privacidade e conforto durante as sessões."),
            image_url: s(PORTRAIT_URL),
        },
        Modality {
            icon: Icon::Brain,
            title: s("Online"),
            description: s("Realize sua terapia onde estiver, com a mesma qualidade e ética do atendimento presencial."),
            image_url: s(ONLINE_IMAGE_URL),
        },
    ]
}

fn quotes() -> Vec<String> {
    vec![
        s("A terapia é um espaço de acolhimento, de encontro consigo mesmo e de transformação."),
        s("Não é sinal de fraqueza buscar ajuda, mas de força e de amor-próprio."),
        s("Quando você escolhe olhar para dentro, escolhe também viver com mais leveza e consciência."),
    ]
}

fn gallery() -> Vec<GalleryImage> {
    vec![
        image("https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=800&q=80", "Sala de atendimento"),
        image("https://images.unsplash.com/photo-1497215728101-856f4ea42174?auto=format&fit=crop&w=800&q=80", "Poltrona do consultório"),
        image("https://images.unsplash.com/photo-1600607686527-6fb886090705?auto=format&fit=crop&w=800&q=80", "Detalhe de decoração com plantas"),
        image("https://images.unsplash.com/photo-1507652313519-d4e9174996dd?auto=format&fit=crop&w=800&q=80", "Sala de espera"),
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            text: s("Encontrei na Ane um espaço de escuta verdadeira. Em poucos meses percebi mudanças que eu buscava há anos."),
            author: s("M. R."),
            rating: 5,
            long_form: false,
        },
        Testimonial {
            text: s("Cheguei à terapia num momento em que nada parecia fazer sentido. O trabalho estava me consumindo, eu não dormia e me sentia sozinha mesmo rodeada de pessoas.\n\nAos poucos, sessão após sessão, fui entendendo de onde vinha tanto cansaço. A Ane nunca me disse o que fazer, mas me ajudou a ouvir o que eu mesma já sabia.\n\nHoje consigo colocar limites, voltei a cuidar de mim e reencontrei a vontade de fazer planos. Sou muito grata por esse caminho."),
            author: s("C. A."),
            rating: 5,
            long_form: true,
        },
        Testimonial {
            text: s("O atendimento online foi tão acolhedor quanto o presencial. Recomendo de olhos fechados."),
            author: s("J. P."),
            rating: 5,
            long_form: false,
        },
        Testimonial {
            text: s("Eu e meu marido procuramos a terapia de casal quando já achávamos que não havia mais conversa possível.\n\nA Ane criou um ambiente seguro em que cada um pôde falar e, principalmente, ser escutado. Aprendemos a discutir sem ferir e a reconhecer o que cada um precisava.\n\nNão foi mágica, foi trabalho, mas com alguém que caminhou do nosso lado o tempo todo."),
            author: s("L. e F."),
            rating: 5,
            long_form: true,
        },
    ]
}

fn faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: s("Como funciona a primeira sessão?"),
            answer: s("A primeira sessão é um momento de acolhimento. Conversamos sobre o que trouxe você até a terapia, suas expectativas e combinamos juntos a frequência e o formato dos encontros."),
        },
        FaqEntry {
            question: s("Qual a duração de cada sessão?"),
            answer: s("As sessões individuais duram cerca de 50 minutos. Sessões de casal podem se estender até 1 hora e 20 minutos."),
        },
        FaqEntry {
            question: s("O atendimento online é tão eficaz quanto o presencial?"),
            answer: s("Sim. O atendimento online segue as mesmas diretrizes éticas do Conselho Federal de Psicologia e tem se mostrado tão eficaz quanto o presencial. Basta um lugar reservado e uma boa conexão."),
        },
        FaqEntry {
            question: s("Vocês aceitam convênio?"),
            answer: s("O atendimento é particular. Emito recibo para que você solicite reembolso junto ao seu plano de saúde, quando ele oferecer essa opção."),
        },
        FaqEntry {
            question: s("O que eu falar na terapia fica em sigilo?"),
            answer: s("Sim. O sigilo profissional é garantido pelo Código de Ética do psicólogo e é a base da relação terapêutica."),
        },
    ]
}

/// The complete page, with every section and anchor.
pub fn consultorio() -> SiteConfig {
    SiteConfig {
        practice: practice(),
        contact: Contact {
            phone_display: s("(11) 98765-4321"),
            whatsapp_number: s("5511987654321"),
            whatsapp_message: s("Olá, Ane! Vim pelo site e gostaria de agendar uma consulta."),
            email: s("contato@anedesouza.com.br"),
            address_lines: vec![
                s("Av. Paulista, 1000 - Conjunto 82"),
                s("Bela Vista, São Paulo - SP"),
            ],
            map_query: s("Av. Paulista, 1000, Bela Vista, São Paulo - SP"),
            opening_hours: Some(s("Segunda a sexta, das 8h às 20h")),
            instagram_url: Some(s("https://www.instagram.com/")),
            linkedin_url: Some(s("https://www.linkedin.com/")),
        },
        sections: vec![
            Section::Hero,
            Section::About,
            Section::Specialties,
            Section::Pinned,
            Section::Modalities,
            Section::Quotes,
            Section::Testimonials,
            Section::Gallery,
            Section::Location,
            Section::Faq,
            Section::Cta,
            Section::Footer,
            Section::FloatingCta,
        ],
        content: PageContent {
            nav_links: vec![
                link("Sobre", "#sobre"),
                link("Especialidades", "#especialidades"),
                link("Atendimento", "#atendimento"),
                link("Depoimentos", "#depoimentos-pacientes"),
                link("Localização", "#localizacao"),
                link("FAQ", "#faq"),
                link("Contato", "#contato"),
            ],
            stats: stats(),
            specialties: specialties(),
            formation: formation(),
            modalities: modalities(),
            pinned: Some(Pinned {
                image_url: s("https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?auto=format&fit=crop&w=1600&q=80"),
                heading: s("Um espaço para ser quem você é"),
                text: s("Na Abordagem Centrada na Pessoa, a relação terapêutica é construída com empatia, aceitação e autenticidade. Aqui você não precisa ter todas as respostas."),
            }),
            quotes: quotes(),
            gallery: gallery(),
            testimonials: testimonials(),
            faq: faq(),
        },
    }
}

/// The earlier, shorter variant: no testimonials, FAQ, map or floating
/// button, and its own contact details.
pub fn classico() -> SiteConfig {
    SiteConfig {
        practice: practice(),
        contact: Contact {
            phone_display: s("(11) 99999-9999"),
            whatsapp_number: s("5511999999999"),
            whatsapp_message: s("Olá! Gostaria de agendar uma conversa."),
            email: s("contato@anedesouza.com.br"),
            address_lines: vec![
                s("Rua das Flores, 123 - Sala 405"),
                s("Centro, São Paulo - SP"),
            ],
            map_query: s("Rua das Flores, 123, Centro, São Paulo - SP"),
            opening_hours: None,
            instagram_url: None,
            linkedin_url: None,
        },
        sections: vec![
            Section::Hero,
            Section::About,
            Section::Specialties,
            Section::Modalities,
            Section::Quotes,
            Section::Gallery,
            Section::Cta,
            Section::Footer,
        ],
        content: PageContent {
            nav_links: vec![
                link("Sobre", "#sobre"),
                link("Especialidades", "#especialidades"),
                link("Atendimento", "#atendimento"),
                // No section on this page carries this anchor.
                link("Depoimentos", "#depoimentos"),
                link("Contato", "#contato"),
            ],
            stats: stats(),
            specialties: specialties(),
            formation: formation(),
            modalities: modalities(),
            pinned: None,
            quotes: quotes(),
            gallery: gallery(),
            testimonials: Vec::new(),
            faq: Vec::new(),
        },
    }
}
