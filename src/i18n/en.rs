pub(super) static STRINGS: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.experience", "Experience"),
    ("nav.education", "Education"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.contact", "Contact"),
    ("nav.menu", "Menu"),
    ("nav.switch_language", "Passer en français"),
    ("hero.greeting", "Hello, I'm"),
    ("hero.name", "The Portfolio"),
    ("hero.title", "Senior SAP ABAP/Fiori Technical Consultant"),
    ("hero.subtitle", "Full-Stack Developer & Automation Enthusiast"),
    ("hero.location", "Thionville, Grand Est, France"),
    ("hero.cta", "Contact me"),
    ("about.title", "About"),
    ("about.intro", "SAP consultant for over a decade, combining ABAP expertise with modern web development."),
    ("about.years", "Years of experience"),
    ("about.projects", "Projects completed"),
    ("experience.title", "Experience"),
    ("experience.current", "Current position"),
    ("education.title", "Education"),
    ("skills.title", "Skills"),
    ("projects.title", "Projects"),
    ("projects.visit", "Visit site"),
    ("projects.source", "Source code"),
    ("contact.title", "Contact"),
    ("contact.subtitle", "A question or a project? Drop me a line."),
    ("contact.email", "Email"),
    ("contact.email_pro", "Work email"),
    ("contact.phone", "Phone"),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.message", "Message"),
    ("contact.form.message_placeholder", "Your message..."),
    ("contact.form.website", "Website"),
    ("contact.form.send", "Send"),
    ("contact.form.sending", "Sending..."),
    ("contact.form.success", "Message sent!"),
    ("contact.form.error", "Failed to send"),
    ("contact.errors.name_required", "Name is required"),
    ("contact.errors.email_required", "Email is required"),
    ("contact.errors.email_invalid", "Invalid email"),
    ("contact.errors.message_required", "Message is required"),
    ("contact.errors.message_too_short", "Message too short (at least 10 characters)"),
    ("admin.title", "Administration"),
    ("admin.sign_in", "Sign in with Google"),
    ("admin.signing_in", "Signing in..."),
    ("admin.sign_out", "Sign out"),
    ("admin.restricted", "Restricted to the site owner."),
    ("admin.unconfigured", "Admin sign-in is not configured."),
    ("admin.errors.access_denied", "Access denied. Only {email} may sign in."),
    ("admin.errors.lookup_failed", "Sign-in failed"),
    ("admin.errors.provider", "Google OAuth error"),
    ("footer.rights", "All rights reserved."),
    ("footer.back_to_top", "Back to top"),
];
