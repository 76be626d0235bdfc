//! Builtin dataset loaded into every seeded store

use crate::content::types::{CreateResponseRequest, CreateTimelineRequest};

/// Timeline of notable chatbots, in display order
pub fn builtin_timeline() -> Vec<CreateTimelineRequest> {
    vec![
        timeline(
            "1966",
            "1960s: ELIZA",
            "ELIZA was one of the first chatbots, developed at MIT by Joseph Weizenbaum. \
             It used pattern matching and substitution methodology to simulate conversation.",
            1,
        ),
        timeline(
            "1995",
            "1990s: A.L.I.C.E.",
            "Artificial Linguistic Internet Computer Entity (A.L.I.C.E.) introduced more \
             sophisticated pattern matching using AIML (Artificial Intelligence Markup Language).",
            2,
        ),
        timeline(
            "2011",
            "2010s: Virtual Assistants",
            "Siri (2011), Google Now (2012), Alexa (2014), and Cortana (2014) revolutionized \
             the way we interact with technology through natural language.",
            3,
        ),
        timeline(
            "2016",
            "2016: Business Chatbots",
            "The rise of Facebook Messenger bots and other business chatbots. Companies began \
             implementing chatbots for customer service and engagement.",
            4,
        ),
        timeline(
            "Now",
            "2020s: Advanced AI Chatbots",
            "GPT-3, ChatGPT, and other large language models enable unprecedented natural \
             language understanding and generation capabilities.",
            5,
        ),
    ]
}

/// Canned answers for the chat demo
pub fn builtin_responses() -> Vec<CreateResponseRequest> {
    vec![
        CreateResponseRequest::new(
            "what is a chatbot",
            "A chatbot is a computer program designed to simulate conversation with human users, \
             especially over the Internet. Chatbots use natural language processing (NLP) and \
             artificial intelligence to understand and respond to user queries in a human-like manner.",
            "general",
        ),
        CreateResponseRequest::new(
            "how do chatbots work",
            "Chatbots work by using natural language processing (NLP) to understand user input, \
             then applying algorithms to determine the appropriate response. Modern chatbots use \
             machine learning to improve their responses over time. The process typically involves \
             tokenizing input, analyzing intent, extracting entities, and then generating \
             appropriate responses.",
            "functionality",
        ),
        CreateResponseRequest::new(
            "what is nlp",
            "Natural Language Processing (NLP) is a branch of artificial intelligence that helps \
             computers understand, interpret, and generate human language. NLP enables chatbots to \
             process text or voice data and respond in a way that mimics human conversation. It \
             involves techniques like tokenization, part-of-speech tagging, entity recognition, \
             and sentiment analysis.",
            "technology",
        ),
        CreateResponseRequest::new(
            "types of chatbots",
            "There are several types of chatbots: 1) Rule-based chatbots that follow predefined \
             paths, 2) AI-powered chatbots that use machine learning, 3) Hybrid chatbots that \
             combine both approaches, 4) Voice-enabled chatbots like virtual assistants, and \
             5) Domain-specific chatbots optimized for particular industries like healthcare or finance.",
            "general",
        ),
        CreateResponseRequest::new(
            "chatbot applications",
            "Chatbots have diverse applications across industries: 1) Customer service for \
             answering FAQs and troubleshooting, 2) E-commerce for product recommendations and \
             order processing, 3) Healthcare for symptom checking and appointment scheduling, \
             4) Banking for account inquiries and transactions, 5) Travel for booking assistance \
             and recommendations, and 6) Education for tutoring and administrative support.",
            "applications",
        ),
        CreateResponseRequest::new(
            "customer service chatbots",
            "Customer service chatbots help businesses handle customer inquiries efficiently. \
             They can answer frequently asked questions 24/7, troubleshoot common problems, \
             process returns and exchanges, collect customer feedback, and escalate complex issues \
             to human agents. They reduce wait times, handle multiple conversations simultaneously, \
             and free up human agents for more complex issues. Companies like Airbnb, Sephora, and \
             Bank of America use customer service chatbots successfully.",
            "applications",
        ),
        CreateResponseRequest::new(
            "how do chatbots use nlp",
            "Chatbots use NLP through several processes: 1) Tokenization - breaking text into \
             words or phrases, 2) Entity Recognition - identifying key elements like names or \
             dates, 3) Intent Classification - determining what the user wants, 4) Sentiment \
             Analysis - understanding the user's emotion, and 5) Response Generation - creating \
             appropriate replies. Advanced models like BERT and GPT integrate machine learning to \
             understand context and generate more natural responses.",
            "technology",
        ),
        CreateResponseRequest::new(
            "what are the benefits of chatbots",
            "The benefits of chatbots include: 1) 24/7 availability for customer support, \
             2) Cost reduction by automating repetitive tasks, 3) Scalability to handle multiple \
             conversations simultaneously, 4) Consistency in responses and service quality, \
             5) Personalization based on user data and history, 6) Faster response times compared \
             to human agents, and 7) Data collection for business insights.",
            "general",
        ),
        CreateResponseRequest::new(
            "what industries use chatbots",
            "Chatbots are used across numerous industries including: 1) Retail and E-commerce for \
             product recommendations and order support, 2) Banking and Finance for account \
             management and financial advice, 3) Healthcare for symptom assessment and appointment \
             scheduling, 4) Travel and Hospitality for bookings and travel information, \
             5) Education for student support and learning assistance, 6) Real Estate for property \
             searches and inquiries, and 7) Insurance for claims processing and policy information.",
            "applications",
        ),
        CreateResponseRequest::new(
            "future of chatbots",
            "The future of chatbots looks promising with several emerging trends: 1) More \
             sophisticated AI with deeper contextual understanding, 2) Voice-enabled interfaces \
             becoming mainstream, 3) Integration with IoT devices and smart homes, 4) Enhanced \
             personalization through better data analysis, 5) Emotional intelligence to recognize \
             and respond to user emotions, 6) Multilingual capabilities for global reach, and \
             7) Seamless handoff between bots and human agents when needed.",
            "general",
        ),
    ]
}

fn timeline(year: &str, title: &str, description: &str, order: i64) -> CreateTimelineRequest {
    CreateTimelineRequest {
        year: year.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        order,
    }
}
