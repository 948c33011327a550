pub(super) static STRINGS: &[(&str, &str)] = &[
    ("nav.home", "Accueil"),
    ("nav.about", "À propos"),
    ("nav.experience", "Expérience"),
    ("nav.education", "Formation"),
    ("nav.skills", "Compétences"),
    ("nav.projects", "Projets"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("nav.switch_language", "Switch to English"),
    ("hero.greeting", "Bonjour, je suis"),
    ("hero.name", "Le Portfolio"),
    ("hero.title", "Consultant technique SAP ABAP/Fiori senior"),
    ("hero.subtitle", "Développeur full-stack et passionné d'automatisation"),
    ("hero.location", "Thionville, Grand Est, France"),
    ("hero.cta", "Me contacter"),
    ("about.title", "À propos"),
    ("about.intro", "Consultant SAP depuis plus de dix ans, alliant expertise ABAP et développement web moderne."),
    ("about.years", "Années d'expérience"),
    ("about.projects", "Projets réalisés"),
    ("experience.title", "Expérience"),
    ("experience.current", "Poste actuel"),
    ("education.title", "Formation"),
    ("skills.title", "Compétences"),
    ("projects.title", "Projets"),
    ("projects.visit", "Voir le site"),
    ("projects.source", "Code source"),
    ("contact.title", "Contact"),
    ("contact.subtitle", "Une question, un projet ? Écrivez-moi."),
    ("contact.email", "Email"),
    ("contact.email_pro", "Email professionnel"),
    ("contact.phone", "Téléphone"),
    ("contact.form.name", "Nom"),
    ("contact.form.email", "Email"),
    ("contact.form.message", "Message"),
    ("contact.form.message_placeholder", "Votre message..."),
    ("contact.form.website", "Site web"),
    ("contact.form.send", "Envoyer"),
    ("contact.form.sending", "Envoi..."),
    ("contact.form.success", "Message envoyé !"),
    ("contact.form.error", "Erreur lors de l'envoi"),
    ("contact.errors.name_required", "Le nom est requis"),
    ("contact.errors.email_required", "L'email est requis"),
    ("contact.errors.email_invalid", "Email invalide"),
    ("contact.errors.message_required", "Le message est requis"),
    ("contact.errors.message_too_short", "Le message doit contenir au moins 10 caractères"),
    ("admin.title", "Administration"),
    ("admin.sign_in", "Se connecter avec Google"),
    ("admin.signing_in", "Connexion..."),
    ("admin.sign_out", "Déconnexion"),
    ("admin.restricted", "Accès réservé au propriétaire du site."),
    ("admin.unconfigured", "Connexion administrateur non configurée."),
    ("admin.errors.access_denied", "Accès refusé. Seul {email} peut se connecter."),
    ("admin.errors.lookup_failed", "Erreur lors de la connexion"),
    ("admin.errors.provider", "Erreur Google OAuth"),
    ("footer.rights", "Tous droits réservés."),
    ("footer.back_to_top", "Retour en haut"),
];
